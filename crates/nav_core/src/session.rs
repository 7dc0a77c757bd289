//! Session store: single owner of the current snapshot.

use std::time::Duration;

use shared::domain::SessionSnapshot;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::auth::AuthProvider;
use crate::error::SessionCheckError;

/// Holds the latest [`SessionSnapshot`] behind a watch channel.
///
/// Starts anonymous, so the guard fails closed even before (or without)
/// [`SessionStore::initialize`]. Reads are synchronous; subscribers are
/// woken on every [`SessionStore::replace`] so the displayed route gets
/// re-evaluated against the new snapshot.
pub struct SessionStore {
    tx: watch::Sender<SessionSnapshot>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionSnapshot::anonymous());
        Self { tx }
    }

    /// The one remote check, bounded by `timeout`. Whatever happens, the
    /// store holds a definite snapshot when this returns: the fetched one
    /// on success, anonymous on any failure. The error is reported so the
    /// caller can log or retry, but consumers never see an "unknown" state.
    pub async fn initialize(
        &self,
        provider: &dyn AuthProvider,
        timeout: Duration,
    ) -> Result<SessionSnapshot, SessionCheckError> {
        match tokio::time::timeout(timeout, provider.check_auth()).await {
            Ok(Ok(snapshot)) => {
                let snapshot = snapshot.normalized();
                info!(
                    authenticated = snapshot.is_authenticated,
                    verified = snapshot.is_verified,
                    "session check complete"
                );
                self.replace(snapshot.clone());
                Ok(snapshot)
            }
            Ok(Err(err)) => {
                warn!(error = %err, "session check failed, continuing anonymously");
                self.replace(SessionSnapshot::anonymous());
                Err(err)
            }
            Err(_) => {
                warn!(
                    timeout_ms = timeout.as_millis() as u64,
                    "session check timed out, continuing anonymously"
                );
                self.replace(SessionSnapshot::anonymous());
                Err(SessionCheckError::Timeout { after: timeout })
            }
        }
    }

    /// Latest snapshot, synchronously. Callable from inside a render pass.
    pub fn current(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    /// Atomic swap. Login/logout/verification flows call this with the
    /// snapshot they produced; normalization keeps the verified-implies-
    /// authenticated invariant regardless of what the caller built.
    pub fn replace(&self, next: SessionSnapshot) {
        self.tx.send_replace(next.normalized());
    }

    /// Change feed for the router integration: re-run the guard for the
    /// displayed route whenever this fires.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
