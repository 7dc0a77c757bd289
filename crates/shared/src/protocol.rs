//! Wire types for the remote profile/auth API. The service is a JS backend,
//! so field names travel in camelCase.

use serde::{Deserialize, Serialize};

use crate::domain::{Role, SessionSnapshot};

/// Body of `GET /api/auth/check-auth`. `user` is absent when the visitor has
/// no live session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAuthResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub username: String,
    pub is_verified: bool,
    #[serde(default)]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u8>,
}

impl CheckAuthResponse {
    /// Collapses the wire answer into a session snapshot. A missing or
    /// unsuccessful `user` is the anonymous snapshot, not an error.
    pub fn into_snapshot(self) -> SessionSnapshot {
        match self.user {
            Some(user) if self.success => SessionSnapshot {
                is_authenticated: true,
                is_verified: user.is_verified,
                role: user.role,
                course: user.course,
                semester: user.semester,
            }
            .normalized(),
            _ => SessionSnapshot::anonymous(),
        }
    }
}
