//! Shared error response structure and error codes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Standard error response structure used across all API endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details (field errors, etc.)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Stable error codes used across the application.
///
/// The transport layer maps these to status codes; the codes themselves never
/// distinguish an unknown email from a wrong password.
pub mod error_codes {
    pub const LOCKED_OUT: &str = "LOCKED_OUT";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const INVALID_PASSWORD: &str = "INVALID_PASSWORD";
    pub const EMAIL_TAKEN: &str = "EMAIL_TAKEN";
    pub const EMAIL_MISMATCH: &str = "EMAIL_MISMATCH";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INVALID_SORT: &str = "INVALID_SORT";
    pub const STORE_FAILURE: &str = "STORE_FAILURE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
