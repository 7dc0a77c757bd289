use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Immutable record of the current visitor's auth/verification/role state,
/// plus the course/semester pair saved on their profile (if any).
///
/// Replaced wholesale on login/logout/verification, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub is_verified: bool,
    pub role: Role,
    pub course: Option<String>,
    pub semester: Option<u8>,
}

impl SessionSnapshot {
    /// The fail-closed value: what every failed or absent session check
    /// collapses to.
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            is_verified: false,
            role: Role::User,
            course: None,
            semester: None,
        }
    }

    /// Re-establishes `is_verified implies is_authenticated`. A snapshot
    /// claiming verification without authentication loses the verification
    /// bit, never the other way around.
    pub fn normalized(mut self) -> Self {
        if !self.is_authenticated {
            self.is_verified = false;
        }
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Course/semester pair when both are saved on the profile.
    pub fn saved_course_semester(&self) -> Option<(&str, u8)> {
        match (self.course.as_deref(), self.semester) {
            (Some(course), Some(semester)) => Some((course, semester)),
            _ => None,
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::anonymous()
    }
}

/// What the navigation layer asks the host shell to do. Opaque to this
/// subsystem; the rendering layer consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum NavigationAction {
    NavigateTo(String),
    SetPanel(bool),
    TogglePanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Canonical paths of the shell. Shortcut and gesture targets reference
/// these; the guarded route table is built from them.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const SIGNUP: &str = "/signup";
    pub const FORGOT_PASSWORD: &str = "/forgot-password";
    pub const RESET_PASSWORD: &str = "/reset-password/:token";
    pub const VERIFY_EMAIL: &str = "/verify-email";
    pub const UPLOAD: &str = "/upload";
    pub const COURSES: &str = "/scsit/courses";
    pub const COURSE_SEMESTERS: &str = "/scsit/:course/semesters";
    pub const SEMESTER_FILES: &str = "/scsit/:course/semesters/:semester";
    pub const EXPLORER: &str = "/scsit/explorer";
    pub const LEADERBOARD: &str = "/leaderboard";
    pub const TOOLS_DEFAULT: &str = "/tools/cgpa";

    pub const DEFAULT_COURSE: &str = "mca";
    pub const DEFAULT_SEMESTER: u8 = 3;

    /// Files page for one semester of one course.
    pub fn semester_files(course: &str, semester: u8) -> String {
        format!("/scsit/{course}/semesters/{semester}")
    }
}
