//! Remote session check.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use shared::{domain::SessionSnapshot, error::ApiError, protocol::CheckAuthResponse};

use crate::error::SessionCheckError;

/// Capability consulted once at startup (and again after auth-mutating
/// flows) to learn who the visitor is.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn check_auth(&self) -> Result<SessionSnapshot, SessionCheckError>;
}

/// Talks to the portal's auth API over HTTP. The portal keeps the visitor's
/// JWT in a `token` cookie, so the client carries a cookie store and an
/// already-issued token can be attached up front.
pub struct HttpAuthProvider {
    http: Client,
    base_url: String,
    session_token: Option<String>,
}

impl HttpAuthProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SessionCheckError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder().cookie_store(true).build()?;
        Ok(Self {
            http,
            base_url,
            session_token: None,
        })
    }

    /// Sends `token` as the portal's session cookie on every check.
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn check_auth(&self) -> Result<SessionSnapshot, SessionCheckError> {
        let mut request = self
            .http
            .get(format!("{}/api/auth/check-auth", self.base_url));
        if let Some(token) = &self.session_token {
            request = request.header(header::COOKIE, format!("token={token}"));
        }
        let response = request.send().await?;

        // A clean "not logged in" answer is a session outcome, not an error.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Ok(SessionSnapshot::anonymous());
        }
        let status = response.status();
        if !status.is_success() {
            // The API usually ships a structured error body; keep it when it
            // decodes, fall back to the bare status when it does not.
            return Err(match response.json::<ApiError>().await {
                Ok(api) => SessionCheckError::Api(api),
                Err(_) => SessionCheckError::Status {
                    status: status.as_u16(),
                },
            });
        }

        let body: CheckAuthResponse = response
            .json()
            .await
            .map_err(|e| SessionCheckError::Malformed(e.to_string()))?;
        Ok(body.into_snapshot())
    }
}

#[cfg(test)]
#[path = "tests/auth_tests.rs"]
mod tests;
