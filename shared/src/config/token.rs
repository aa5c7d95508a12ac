//! Session token configuration

use serde::{Deserialize, Serialize};

/// JWT session token configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,

    /// Token expiry time in seconds
    pub token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("change-this-secret-in-production"),
            token_expiry: 3600, // 1 hour
            issuer: String::from("bankline"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with the given secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.token_expiry = minutes * 60;
        self
    }
}
