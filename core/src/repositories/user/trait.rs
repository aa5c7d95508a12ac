//! User repository trait defining the interface for user persistence.
//!
//! Implementations own email uniqueness: `create` and `update` must run
//! their uniqueness check and the write as one atomic step, so two
//! concurrent registrations of the same email cannot both succeed.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

/// Repository contract for [`User`] persistence.
///
/// Emails passed in are expected to be normalized already (the service layer
/// lowercases at every boundary).
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Return all users in insertion order.
    ///
    /// The query engine filters, sorts, and paginates in memory, so the
    /// contract is the full collection in a stable store order.
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Persist a new user.
    ///
    /// Fails with [`DomainError::EmailTaken`] if the email already exists;
    /// the check and the insert are one critical section.
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user, re-enforcing email uniqueness.
    ///
    /// Fails with [`DomainError::NotFound`] if the id is unknown.
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Replace the stored password hash.
    ///
    /// Returns `false` if the id is unknown.
    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: String,
    ) -> Result<bool, DomainError>;

    /// Delete a user. Returns `false` if the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check whether a normalized email is registered.
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
