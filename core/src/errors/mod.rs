//! Domain-specific error types and error handling.
//!
//! Every core operation resolves to either a success or exactly one of these
//! kinds; callers map each kind to a transport status themselves. Credential
//! failures deliberately share a single message so that an unknown email and
//! a wrong password are indistinguishable to the caller.

use bl_shared::errors::{error_codes, ErrorResponse};
use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// Too many failed logins inside the throttle window
    #[error("Too many failed login attempts")]
    LockedOut,

    /// Unknown email or wrong password; the two are never distinguished
    #[error("Wrong email or password")]
    InvalidCredentials,

    /// Wrong password for a banking operation addressed by account id
    #[error("Invalid password")]
    InvalidPassword,

    /// The email already exists in the targeted namespace
    #[error("Email is already registered")]
    EmailTaken,

    /// The supplied email does not belong to the addressed account
    #[error("Email does not match the account")]
    EmailMismatch,

    /// The addressed resource does not exist
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Malformed sort expression (bad order keyword or unknown field)
    #[error("Invalid sort expression: {reason}")]
    InvalidSort { reason: String },

    /// A collaborator (store, verifier, issuer) failed; passed through untouched
    #[error("Store failure: {message}")]
    Store { message: String },

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a not-found error on a named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Stable error code for the transport layer
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::LockedOut => error_codes::LOCKED_OUT,
            DomainError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
            DomainError::InvalidPassword => error_codes::INVALID_PASSWORD,
            DomainError::EmailTaken => error_codes::EMAIL_TAKEN,
            DomainError::EmailMismatch => error_codes::EMAIL_MISMATCH,
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::InvalidSort { .. } => error_codes::INVALID_SORT,
            DomainError::Store { .. } => error_codes::STORE_FAILURE,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
        }
    }

    /// Whether the error is a deliberate business outcome, as opposed to a
    /// collaborator failure the caller may retry
    pub fn is_business_outcome(&self) -> bool {
        !matches!(
            self,
            DomainError::Store { .. } | DomainError::Internal { .. }
        )
    }
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        ErrorResponse::new(err.error_code(), err.to_string())
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_share_one_message() {
        // Lockout must stay distinguishable, credential failures must not.
        assert_eq!(
            DomainError::InvalidCredentials.to_string(),
            "Wrong email or password"
        );
        assert_ne!(
            DomainError::LockedOut.to_string(),
            DomainError::InvalidCredentials.to_string()
        );
    }

    #[test]
    fn error_codes_are_stable() {
        let err = DomainError::not_found("BankAccount");
        assert_eq!(err.error_code(), "NOT_FOUND");

        let response: ErrorResponse = (&DomainError::LockedOut).into();
        assert_eq!(response.error, "LOCKED_OUT");
    }

    #[test]
    fn store_failures_are_not_business_outcomes() {
        assert!(DomainError::EmailTaken.is_business_outcome());
        assert!(!DomainError::Store {
            message: "connection reset".into()
        }
        .is_business_outcome());
    }
}
