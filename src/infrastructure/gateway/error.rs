use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised while setting the gateway up; the gateway is unusable afterwards
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Missing backend configuration: {0}")]
    Configuration(String),

    #[error("Invalid backend URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Account gateway is already initialized")]
    AlreadyInitialized,

    #[error("Account gateway is not initialized")]
    NotInitialized,
}

/// Failure reported by the backend, or on the way to it.
///
/// Gateway operations never return this as `Err`; it travels as data inside
/// their normalized responses.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct BackendError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl BackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            code: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// No signed-in session to act on
    pub fn session_missing() -> Self {
        Self::new("Auth session missing!").with_status(400)
    }

    /// The backend no longer knows the session (expired, revoked or deleted)
    pub fn is_session_gone(&self) -> bool {
        matches!(self.status, Some(401 | 403 | 404))
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();
        match error.status() {
            Some(status) => Self::new(message).with_status(status.as_u16()),
            None => Self::new(message),
        }
    }
}
