//! Core error types for the Aura Gold console.
//!
//! This module defines transport-agnostic error types. The API client crate
//! converts its HTTP and decoding failures into [`TransportError`] at the
//! trait boundary so callers never see `reqwest` types.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the console.
///
/// Aggregation never produces an error: every reduction is total over
/// malformed input. Errors only come from talking to the invoice API or from
/// validating user input before a request is sent.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to reach invoice service: {0}")]
    Transport(#[from] TransportError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Authentication failed: {0}")]
    Auth(String),
}

/// Network or HTTP failure while talking to the invoice API.
///
/// `status` is `None` when no response was received at all (DNS, connect,
/// timeout).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", describe_transport(.status, .message))]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

fn describe_transport(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("HTTP {}: {}", code, message),
        None => message.to_string(),
    }
}

impl TransportError {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
