//! Main authentication service implementation

use std::sync::Arc;
use tracing::{info, warn};

use bl_shared::utils::email;

use crate::domain::value_objects::LoginResponse;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordVerifier;
use crate::services::token::TokenIssuer;

use super::attempt_tracker::AttemptTracker;

/// Plaintext filler hashed at construction time to produce the placeholder
/// hash for unknown emails. The placeholder keeps the unknown-email path and
/// the wrong-password path doing identical verifier work, so response timing
/// cannot be used to enumerate registered emails.
const FALLBACK_PASSWORD_FILLER: &str = "<fallback-password-filler>";

/// Authentication service orchestrating the attempt tracker, credential
/// store, password verifier, and token issuer.
pub struct AuthService<U, P, T>
where
    U: UserRepository,
    P: PasswordVerifier,
    T: TokenIssuer,
{
    /// User repository for credential lookups
    user_repository: Arc<U>,
    /// Password verifier (hashing collaborator)
    verifier: Arc<P>,
    /// Session token issuer
    token_issuer: Arc<T>,
    /// Shared failed-attempt state
    attempts: Arc<AttemptTracker>,
    /// Placeholder hash verified against when the email is unknown
    fallback_hash: String,
}

impl<U, P, T> AuthService<U, P, T>
where
    U: UserRepository,
    P: PasswordVerifier,
    T: TokenIssuer,
{
    /// Create a new authentication service.
    ///
    /// Hashes the placeholder filler through the injected verifier once, so
    /// construction fails if the verifier is unusable.
    pub fn new(
        user_repository: Arc<U>,
        verifier: Arc<P>,
        token_issuer: Arc<T>,
        attempts: Arc<AttemptTracker>,
    ) -> DomainResult<Self> {
        let fallback_hash = verifier.hash(FALLBACK_PASSWORD_FILLER)?;
        Ok(Self {
            user_repository,
            verifier,
            token_issuer,
            attempts,
            fallback_hash,
        })
    }

    /// Check login credentials and issue a session token.
    ///
    /// Outcomes:
    /// - `Ok(LoginResponse)` with the token and the number of failures that
    ///   had accumulated before this success
    /// - `Err(DomainError::LockedOut)` once the identity has reached the
    ///   lockout threshold inside the window; the password verifier is not
    ///   invoked on this branch
    /// - `Err(DomainError::InvalidCredentials)` for an unknown email or a
    ///   wrong password, indistinguishably
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<LoginResponse> {
        let identity = email::normalize(email);

        // Step 1: refuse locked-out identities before touching the verifier.
        let prior_attempts = self.attempts.failed_attempts(&identity);
        if prior_attempts >= self.attempts.max_failed_attempts() {
            warn!(attempts = prior_attempts, "Login refused: identity locked out");
            return Err(DomainError::LockedOut);
        }

        // Step 2: look up the user; fall back to the placeholder hash so an
        // unknown email costs the same verifier work as a wrong password.
        let user = self.user_repository.find_by_email(&identity).await?;
        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.as_str())
            .unwrap_or(&self.fallback_hash);

        // Step 3: always run exactly one verification.
        let password_matched = self.verifier.matches(password, stored_hash)?;

        // Step 4: success needs both an existing user and a matching password.
        match user {
            Some(user) if password_matched => {
                self.attempts.clear(&identity);
                let token = self.token_issuer.issue(user.id, &user.email)?;

                info!(user_id = %user.id, "Login succeeded");
                Ok(LoginResponse {
                    user_id: user.id,
                    email: user.email,
                    name: user.name,
                    token,
                    login_attempts: prior_attempts,
                })
            }
            // Step 5: one uniform failure, whatever actually went wrong.
            _ => {
                self.attempts.record_failure(&identity);
                Err(DomainError::InvalidCredentials)
            }
        }
    }

    /// Failed attempts currently counted against an identity (diagnostic)
    pub fn failed_attempts(&self, email: &str) -> u32 {
        self.attempts.failed_attempts(&email::normalize(email))
    }
}
