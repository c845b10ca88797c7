//! Error taxonomy for calls against the backend service.
//!
//! ERROR HANDLING
//! ==============
//! Callers never show these to the user verbatim. The session context treats
//! every variant as "no session"; forms map them onto a toast title.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by backend service operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// No active session, or the session lacks access to the resource.
    #[error("unauthorized")]
    Unauthorized,

    /// The requested document, file, or user record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The service answered with a non-success status.
    #[error("service error: status {status}: {message}")]
    Service { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(String),

    /// Backend calls are only made from the browser.
    #[error("backend not available outside the browser")]
    Unavailable,
}

impl BackendError {
    /// Map a non-success HTTP status and the service's `message` field.
    #[must_use]
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            404 => Self::NotFound(message.unwrap_or_else(|| "resource".to_owned())),
            _ => Self::Service { status, message: message.unwrap_or_default() },
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
