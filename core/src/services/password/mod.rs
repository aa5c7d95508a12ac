//! Password hashing and verification seam.
//!
//! The verifier is a collaborator contract: services depend on the trait,
//! tests substitute counting stubs, and production uses the bcrypt
//! implementation. `matches` must take the same time wherever the mismatch
//! occurs; bcrypt gives this by construction since the full key schedule runs
//! regardless of the comparison outcome.

use crate::errors::{DomainError, DomainResult};

/// Collaborator contract for password hashing and verification
pub trait PasswordVerifier: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, plaintext: &str) -> DomainResult<String>;

    /// Check a plaintext against a stored hash.
    ///
    /// Runs in time independent of where a mismatch occurs.
    fn matches(&self, plaintext: &str, hash: &str) -> DomainResult<bool>;
}

/// bcrypt-backed password verifier
pub struct BcryptPasswordVerifier {
    cost: u32,
}

impl BcryptPasswordVerifier {
    /// Create a verifier with an explicit bcrypt cost
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Create a verifier with the default bcrypt cost
    pub fn with_defaults() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl Default for BcryptPasswordVerifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PasswordVerifier for BcryptPasswordVerifier {
    fn hash(&self, plaintext: &str) -> DomainResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn matches(&self, plaintext: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}
