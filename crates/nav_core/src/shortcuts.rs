//! Keyboard-chord to navigation-action bindings.
//!
//! Gating is declarative: each binding carries `requires_auth` /
//! `requires_admin` flags and one filter routine applies them, so no entry
//! embeds its own auth check.

use shared::domain::{paths, NavigationAction, SessionSnapshot};

/// What a binding does once resolved against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Navigate(&'static str),
    /// Files page of the session's saved course/semester, or the fixed
    /// default when none is saved.
    SavedSemesterFiles,
    TogglePanel,
}

#[derive(Debug, Clone, Copy)]
pub struct ShortcutBinding {
    pub chord: &'static str,
    pub label: &'static str,
    pub action: ShortcutAction,
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl ShortcutBinding {
    fn available_to(&self, session: &SessionSnapshot) -> bool {
        (!self.requires_auth || session.is_authenticated)
            && (!self.requires_admin || session.is_admin())
    }
}

const fn open(chord: &'static str, label: &'static str, action: ShortcutAction) -> ShortcutBinding {
    ShortcutBinding {
        chord,
        label,
        action,
        requires_auth: false,
        requires_admin: false,
    }
}

pub const BINDINGS: &[ShortcutBinding] = &[
    open("ctrl+s", "Toggle side panel", ShortcutAction::TogglePanel),
    open("ctrl+p", "Browse courses", ShortcutAction::Navigate(paths::COURSES)),
    ShortcutBinding {
        chord: "ctrl+u",
        label: "Upload files",
        action: ShortcutAction::Navigate(paths::UPLOAD),
        requires_auth: true,
        requires_admin: true,
    },
    open("ctrl+a", "Explore all files", ShortcutAction::Navigate(paths::EXPLORER)),
    open("ctrl+q", "Open tools", ShortcutAction::Navigate(paths::TOOLS_DEFAULT)),
    open("ctrl+h", "Go home", ShortcutAction::Navigate(paths::HOME)),
    open("ctrl+l", "View leaderboard", ShortcutAction::Navigate(paths::LEADERBOARD)),
    open("ctrl+d", "Open your semester files", ShortcutAction::SavedSemesterFiles),
];

/// Bindings the given session may use, in table order.
pub fn active_bindings(session: &SessionSnapshot) -> Vec<&'static ShortcutBinding> {
    BINDINGS
        .iter()
        .filter(|b| b.available_to(session))
        .collect()
}

/// Maps a chord to its action for this session. Unknown or unavailable
/// chords are `None`; pressing a key nobody bound is not a failure.
pub fn resolve(chord: &str, session: &SessionSnapshot) -> Option<NavigationAction> {
    let chord = chord.trim().to_ascii_lowercase();
    let binding = BINDINGS
        .iter()
        .find(|b| b.chord == chord && b.available_to(session))?;
    Some(match binding.action {
        ShortcutAction::Navigate(path) => NavigationAction::NavigateTo(path.to_string()),
        ShortcutAction::SavedSemesterFiles => {
            NavigationAction::NavigateTo(saved_files_target(session))
        }
        ShortcutAction::TogglePanel => NavigationAction::TogglePanel,
    })
}

/// Files path for the session's saved course/semester, falling back to the
/// shell default. Shared with the gesture dispatcher.
pub fn saved_files_target(session: &SessionSnapshot) -> String {
    match session.saved_course_semester() {
        Some((course, semester)) => paths::semester_files(course, semester),
        None => paths::semester_files(paths::DEFAULT_COURSE, paths::DEFAULT_SEMESTER),
    }
}

#[cfg(test)]
#[path = "tests/shortcuts_tests.rs"]
mod tests;
