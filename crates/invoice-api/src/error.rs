//! Error types for the invoice API crate.

use auragold_core::errors::{Error as CoreError, TransportError, ValidationError};
use thiserror::Error;

/// Result type alias for invoice API operations.
pub type Result<T> = std::result::Result<T, InvoiceApiError>;

/// Errors that can occur while talking to the invoice service.
#[derive(Debug, Error)]
pub enum InvoiceApiError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success response from the service
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Invalid request (bad base URL, missing data, etc.)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Login rejected
    #[error("Authentication error: {0}")]
    Auth(String),
}

impl InvoiceApiError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<InvoiceApiError> for CoreError {
    fn from(err: InvoiceApiError) -> Self {
        match err {
            InvoiceApiError::Auth(message) => CoreError::Auth(message),
            InvoiceApiError::InvalidRequest(message) => {
                CoreError::Validation(ValidationError::InvalidInput(message))
            }
            InvoiceApiError::Api { status, message } => {
                CoreError::Transport(TransportError::new(Some(status), message))
            }
            InvoiceApiError::Http(e) => {
                let status = e.status().map(|s| s.as_u16());
                CoreError::Transport(TransportError::new(status, e.to_string()))
            }
            InvoiceApiError::Json(e) => CoreError::Transport(TransportError::new(
                None,
                format!("Malformed response: {}", e),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_maps_to_transport_with_status() {
        let core: CoreError = InvoiceApiError::api(503, "Service Unavailable").into();

        match core {
            CoreError::Transport(e) => {
                assert_eq!(e.status, Some(503));
                assert_eq!(e.message, "Service Unavailable");
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[test]
    fn auth_error_stays_auth() {
        let core: CoreError = InvoiceApiError::auth("Invalid email or password").into();

        assert!(matches!(core, CoreError::Auth(m) if m == "Invalid email or password"));
    }

    #[test]
    fn invalid_request_becomes_validation_error() {
        let core: CoreError = InvoiceApiError::invalid_request("bad url").into();

        assert!(matches!(core, CoreError::Validation(_)));
    }

    #[test]
    fn json_error_has_no_status() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = InvoiceApiError::from(json_err);
        assert_eq!(err.status(), None);

        match CoreError::from(err) {
            CoreError::Transport(e) => assert_eq!(e.status, None),
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
