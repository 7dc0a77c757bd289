//! Session-gated navigation layer of the portal shell.
//!
//! Everything here reads one immutable [`shared::domain::SessionSnapshot`]
//! owned by the [`session::SessionStore`] and computes a decision: the route
//! guard decides allow-or-redirect per navigation attempt, the shortcut
//! registry maps keyboard chords to navigation actions, and the gesture
//! dispatcher maps swipes to panel or navigation actions. All decision
//! functions are synchronous and total; the single async boundary is the
//! startup session check.

pub mod auth;
pub mod config;
pub mod error;
pub mod gestures;
pub mod guard;
pub mod routes;
pub mod session;
pub mod shortcuts;

pub use auth::{AuthProvider, HttpAuthProvider};
pub use config::{load_settings, Settings};
pub use error::SessionCheckError;
pub use gestures::{dispatch, GestureContext};
pub use guard::{evaluate, Decision};
pub use routes::{AccessClass, RouteEntry, RouteTable};
pub use session::SessionStore;
pub use shortcuts::{active_bindings, resolve, ShortcutBinding};
