//! Per-navigation access decision.

use shared::domain::{paths, SessionSnapshot};
use tracing::debug;

use crate::routes::{AccessClass, RouteTable};

/// Outcome of one navigation attempt. A redirect is consumed as a history
/// replacement, so the denied page is never reachable via back-navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allowed,
    Redirect { to: String },
}

impl Decision {
    fn redirect(to: &str) -> Self {
        Self::Redirect { to: to.to_string() }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// Decides whether the current session may see `path`.
///
/// Total over every input: unknown paths fall through to a home redirect,
/// and a failed session check has already collapsed to the anonymous
/// snapshot upstream, so denial is the worst possible outcome.
pub fn evaluate(table: &RouteTable, path: &str, session: &SessionSnapshot) -> Decision {
    let Some(entry) = table.classify(path) else {
        debug!(path, "no route entry, redirecting home");
        return Decision::redirect(paths::HOME);
    };

    let decision = match entry.access() {
        AccessClass::Public => Decision::Allowed,
        AccessClass::Protected => {
            if !session.is_authenticated {
                Decision::redirect(paths::LOGIN)
            } else if !session.is_verified {
                Decision::redirect(paths::VERIFY_EMAIL)
            } else {
                Decision::Allowed
            }
        }
        AccessClass::AuthOnly => {
            if session.is_authenticated && session.is_verified {
                Decision::redirect(paths::HOME)
            } else {
                Decision::Allowed
            }
        }
    };

    debug!(path, pattern = entry.pattern(), ?decision, "route evaluated");
    decision
}

#[cfg(test)]
#[path = "tests/guard_tests.rs"]
mod tests;
