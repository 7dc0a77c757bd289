use super::*;
use shared::domain::{Role, SessionSnapshot};

fn anonymous() -> SessionSnapshot {
    SessionSnapshot::anonymous()
}

fn unverified() -> SessionSnapshot {
    SessionSnapshot {
        is_authenticated: true,
        is_verified: false,
        role: Role::User,
        course: None,
        semester: None,
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

const PROTECTED: &[&str] = &[
    "/",
    "/upload",
    "/scsit/courses",
    "/scsit/mca/semesters",
    "/scsit/mca/semesters/3",
];
const AUTH_ONLY: &[&str] = &[
    "/signup",
    "/login",
    "/forgot-password",
    "/reset-password/tok123",
];

#[test]
fn protected_paths_bounce_anonymous_visitors_to_login() {
    let table = RouteTable::shell();
    for path in PROTECTED {
        assert_eq!(
            evaluate(&table, path, &anonymous()),
            Decision::Redirect { to: "/login".into() },
            "path {path}"
        );
    }
}

#[test]
fn protected_paths_bounce_unverified_visitors_to_verify_email() {
    let table = RouteTable::shell();
    for path in PROTECTED {
        assert_eq!(
            evaluate(&table, path, &unverified()),
            Decision::Redirect {
                to: "/verify-email".into()
            },
            "path {path}"
        );
    }
}

#[test]
fn protected_paths_allow_verified_visitors() {
    let table = RouteTable::shell();
    for path in PROTECTED {
        assert_eq!(evaluate(&table, path, &verified()), Decision::Allowed, "path {path}");
    }
}

#[test]
fn auth_only_paths_bounce_verified_visitors_home() {
    let table = RouteTable::shell();
    for path in AUTH_ONLY {
        assert_eq!(
            evaluate(&table, path, &verified()),
            Decision::Redirect { to: "/".into() },
            "path {path}"
        );
    }
}

#[test]
fn auth_only_paths_allow_everyone_else() {
    let table = RouteTable::shell();
    for path in AUTH_ONLY {
        assert_eq!(evaluate(&table, path, &anonymous()), Decision::Allowed, "path {path}");
        assert_eq!(evaluate(&table, path, &unverified()), Decision::Allowed, "path {path}");
    }
}

#[test]
fn verify_email_is_public_to_all() {
    let table = RouteTable::shell();
    for session in [anonymous(), unverified(), verified()] {
        assert_eq!(evaluate(&table, "/verify-email", &session), Decision::Allowed);
    }
}

#[test]
fn unknown_paths_redirect_home() {
    let table = RouteTable::shell();
    for session in [anonymous(), verified()] {
        assert_eq!(
            evaluate(&table, "/definitely-not-a-page", &session),
            Decision::Redirect { to: "/".into() }
        );
    }
}

#[test]
fn evaluation_is_idempotent() {
    let table = RouteTable::shell();
    let sessions = [anonymous(), unverified(), verified()];
    let paths = ["/", "/login", "/upload", "/verify-email", "/nowhere"];
    for session in &sessions {
        for path in paths {
            assert_eq!(
                evaluate(&table, path, session),
                evaluate(&table, path, session),
                "path {path}"
            );
        }
    }
}

#[test]
fn upload_scenario_redirects_anonymous_to_login() {
    let table = RouteTable::shell();
    assert_eq!(
        evaluate(&table, "/upload", &anonymous()),
        Decision::Redirect { to: "/login".into() }
    );
}

#[test]
fn login_scenario_redirects_verified_home() {
    let table = RouteTable::shell();
    assert_eq!(
        evaluate(&table, "/login", &verified()),
        Decision::Redirect { to: "/".into() }
    );
}

#[test]
fn course_semesters_scenario_allows_verified() {
    let table = RouteTable::shell();
    assert_eq!(
        evaluate(&table, "/scsit/mca/semesters", &verified()),
        Decision::Allowed
    );
}

#[test]
fn shortcut_and_gesture_targets_stay_reachable_for_verified_users() {
    // The guard must never bounce a page this layer itself navigates to.
    let table = RouteTable::shell();

    let with_saved = verified();
    let target = crate::shortcuts::saved_files_target(&with_saved);
    assert_eq!(evaluate(&table, &target, &with_saved), Decision::Allowed);

    let without_saved = SessionSnapshot {
        course: None,
        semester: None,
        ..verified()
    };
    let target = crate::shortcuts::saved_files_target(&without_saved);
    assert_eq!(evaluate(&table, &target, &without_saved), Decision::Allowed);
}

#[test]
fn decision_is_allowed_helper() {
    assert!(Decision::Allowed.is_allowed());
    assert!(!Decision::Redirect { to: "/".into() }.is_allowed());
}
