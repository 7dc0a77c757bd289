use std::time::Duration;

use thiserror::Error;

/// Why the startup session check could not determine identity. Every
/// variant collapses to the anonymous snapshot at the store; the variant
/// only decides what gets logged.
#[derive(Debug, Error)]
pub enum SessionCheckError {
    #[error("session check timed out after {after:?}")]
    Timeout { after: Duration },
    #[error("auth endpoint rejected the check: {0}")]
    Api(shared::error::ApiError),
    #[error("auth endpoint answered with status {status}")]
    Status { status: u16 },
    #[error("could not reach auth endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed check-auth response: {0}")]
    Malformed(String),
}
