//! Error taxonomy for the request pipelines.
//!
//! `Display` is the user-facing message the dashboards render, so every
//! failure that reaches the UI has something sensible to show without extra
//! mapping. Nothing here is ever silently dropped: a call either produces a
//! value, one of these variants, or the 401 special case (which is also one
//! of these variants).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: the server never answered.
    #[error("Network error. Please check that the backend server is running.")]
    Network(#[source] reqwest::Error),

    /// HTTP 401 on the authenticated pipeline. The session store has already
    /// been cleared by the time the caller sees this; the caller only decides
    /// where to navigate.
    #[error("Your session has expired. Please log in again.")]
    AuthExpired,

    /// HTTP 403. The session is valid but not allowed to do this; it is
    /// preserved.
    #[error("Access denied. You don't have permission to view this content.")]
    Forbidden,

    /// HTTP 404.
    #[error("The requested resource was not found.")]
    NotFound,

    /// Any 5xx.
    #[error("Server error. Please try again later.")]
    Server,

    /// Any other non-success status; carries the server's own message when
    /// one was sent (e.g. "Invalid username or password" on a bad login).
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The status was fine but the body did not parse as the expected shape.
    #[error("The server returned an unexpected response.")]
    Body(#[source] reqwest::Error),
}

impl ApiError {
    pub(crate) fn rejected(status: u16, message: Option<String>) -> Self {
        let message = match message {
            Some(m) if !m.trim().is_empty() => m,
            _ => format!("Unexpected response from the server (status {status})."),
        };
        ApiError::Rejected { status, message }
    }

    /// The HTTP status this error was mapped from, where there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::AuthExpired => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound => Some(404),
            ApiError::Server => Some(500),
            ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Network(_) | ApiError::Body(_) => None,
        }
    }

    /// Whether the failed call should be re-issued after signing in again.
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, ApiError::AuthExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_prefers_the_server_message() {
        let err = ApiError::rejected(400, Some("Invalid username or password".into()));
        assert_eq!(err.to_string(), "Invalid username or password");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn rejected_falls_back_to_a_status_message() {
        let err = ApiError::rejected(418, None);
        assert!(err.to_string().contains("418"));

        let blank = ApiError::rejected(400, Some("   ".into()));
        assert!(blank.to_string().contains("400"));
    }

    #[test]
    fn auth_expired_is_distinguishable() {
        assert!(ApiError::AuthExpired.is_auth_expired());
        assert!(!ApiError::Forbidden.is_auth_expired());
        assert!(!ApiError::Server.is_auth_expired());
    }
}
