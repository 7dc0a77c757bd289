use super::*;
use async_trait::async_trait;
use shared::domain::Role;

enum StubOutcome {
    Ready(SessionSnapshot),
    Fail,
    Hang,
}

struct StubAuth {
    outcome: StubOutcome,
}

#[async_trait]
impl AuthProvider for StubAuth {
    async fn check_auth(&self) -> Result<SessionSnapshot, SessionCheckError> {
        match &self.outcome {
            StubOutcome::Ready(snapshot) => Ok(snapshot.clone()),
            StubOutcome::Fail => Err(SessionCheckError::Malformed("stub failure".into())),
            StubOutcome::Hang => {
                tokio::time::sleep(Duration::from_secs(600)).await;
                Ok(SessionSnapshot::anonymous())
            }
        }
    }
}

fn verified() -> SessionSnapshot {
    SessionSnapshot {
        is_authenticated: true,
        is_verified: true,
        role: Role::User,
        course: Some("mca".into()),
        semester: Some(3),
    }
}

#[test]
fn store_starts_anonymous() {
    let store = SessionStore::new();
    assert_eq!(store.current(), SessionSnapshot::anonymous());
}

#[tokio::test]
async fn initialize_installs_the_fetched_snapshot() {
    let store = SessionStore::new();
    let provider = StubAuth {
        outcome: StubOutcome::Ready(verified()),
    };
    let got = store
        .initialize(&provider, Duration::from_secs(5))
        .await
        .expect("check succeeds");
    assert_eq!(got, verified());
    assert_eq!(store.current(), verified());
}

#[tokio::test]
async fn failed_check_lands_on_anonymous() {
    let store = SessionStore::new();
    // A stale logged-in snapshot must not survive a failed re-check.
    store.replace(verified());
    let provider = StubAuth {
        outcome: StubOutcome::Fail,
    };
    let err = store
        .initialize(&provider, Duration::from_secs(5))
        .await
        .expect_err("check fails");
    assert!(matches!(err, SessionCheckError::Malformed(_)));
    assert_eq!(store.current(), SessionSnapshot::anonymous());
}

#[tokio::test(start_paused = true)]
async fn timed_out_check_fails_closed() {
    let store = SessionStore::new();
    let provider = StubAuth {
        outcome: StubOutcome::Hang,
    };
    let err = store
        .initialize(&provider, Duration::from_secs(4))
        .await
        .expect_err("check times out");
    assert!(matches!(err, SessionCheckError::Timeout { .. }));
    assert_eq!(store.current(), SessionSnapshot::anonymous());
}

#[tokio::test]
async fn replace_wakes_subscribers() {
    let store = SessionStore::new();
    let mut rx = store.subscribe();
    store.replace(verified());
    rx.changed().await.expect("sender alive");
    assert_eq!(*rx.borrow(), verified());
}

#[test]
fn replace_normalizes_the_invariant() {
    let store = SessionStore::new();
    store.replace(SessionSnapshot {
        is_authenticated: false,
        is_verified: true,
        role: Role::Admin,
        course: None,
        semester: None,
    });
    let current = store.current();
    assert!(!current.is_verified);
    assert!(!current.is_authenticated);
}

#[tokio::test]
async fn later_replace_supersedes_earlier_state() {
    let store = SessionStore::new();
    store.replace(verified());
    store.replace(SessionSnapshot::anonymous());
    assert_eq!(store.current(), SessionSnapshot::anonymous());
}
