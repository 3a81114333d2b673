//! Wire types specific to the invoice service.

use serde::{Deserialize, Serialize};

/// Error body some endpoints return alongside a non-success status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorResponse {
    pub fn detail(&self) -> Option<&str> {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .filter(|m| !m.is_empty())
    }
}

/// Message shown when the login endpoint rejects the credentials.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
