//! User account service: CRUD plus the list pipeline.

use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use bl_shared::types::{PaginatedResponse, Pagination};
use bl_shared::utils::email;

use crate::domain::entities::User;
use crate::domain::value_objects::UserSummary;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::password::PasswordVerifier;

use super::query;

/// Service for managing user accounts.
///
/// All read surfaces return [`UserSummary`]; the password hash never leaves
/// this layer. Emails are normalized at every entry point.
pub struct UserService<U, P>
where
    U: UserRepository,
    P: PasswordVerifier,
{
    user_repository: Arc<U>,
    verifier: Arc<P>,
}

impl<U, P> UserService<U, P>
where
    U: UserRepository,
    P: PasswordVerifier,
{
    /// Create a new user service
    pub fn new(user_repository: Arc<U>, verifier: Arc<P>) -> Self {
        Self {
            user_repository,
            verifier,
        }
    }

    /// List users with filtering, sorting, and pagination.
    ///
    /// `search_expr` is `"field:substring"` (malformed or unknown-field
    /// expressions match everything); `sort_expr` is `"field:order"` with
    /// order in `{asc, desc}` (anything else is `InvalidSort`); empty sort
    /// keeps store order. Page numbers and sizes are assumed positive;
    /// request validation happens at the transport layer.
    pub async fn list(
        &self,
        page_number: u32,
        page_size: u32,
        search_expr: &str,
        sort_expr: &str,
    ) -> DomainResult<PaginatedResponse<UserSummary>> {
        let users = self.user_repository.list().await?;
        query::list(
            users,
            search_expr,
            sort_expr,
            Pagination::new(page_number, page_size),
        )
    }

    /// Fetch one user's summary
    pub async fn get(&self, id: Uuid) -> DomainResult<UserSummary> {
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        Ok(UserSummary::from(&user))
    }

    /// Register a new user.
    ///
    /// The email is normalized before the uniqueness check; the store
    /// enforces uniqueness atomically.
    pub async fn register(
        &self,
        name: &str,
        email_addr: &str,
        password: &str,
    ) -> DomainResult<UserSummary> {
        let password_hash = self.verifier.hash(password)?;
        let user = User::new(
            name.to_string(),
            email::normalize(email_addr),
            password_hash,
        );

        let created = self.user_repository.create(user).await?;
        info!(user_id = %created.id, "User registered");
        Ok(UserSummary::from(created))
    }

    /// Update a user's name and email
    pub async fn update_profile(
        &self,
        id: Uuid,
        name: &str,
        email_addr: &str,
    ) -> DomainResult<UserSummary> {
        let mut user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;

        user.update_profile(name.to_string(), email::normalize(email_addr));
        let updated = self.user_repository.update(user).await?;
        Ok(UserSummary::from(updated))
    }

    /// Delete a user
    pub async fn delete(&self, id: Uuid) -> DomainResult<()> {
        if !self.user_repository.delete(id).await? {
            return Err(DomainError::not_found("User"));
        }
        info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Check whether a normalized email is already registered
    pub async fn email_is_registered(&self, email_addr: &str) -> DomainResult<bool> {
        self.user_repository
            .exists_by_email(&email::normalize(email_addr))
            .await
    }

    /// Check a user's password (used by the change-password flow)
    pub async fn check_password(&self, id: Uuid, password: &str) -> DomainResult<bool> {
        let user = self
            .user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        self.verifier.matches(password, &user.password_hash)
    }

    /// Replace a user's password
    pub async fn change_password(&self, id: Uuid, new_password: &str) -> DomainResult<()> {
        let password_hash = self.verifier.hash(new_password)?;
        if !self
            .user_repository
            .update_password_hash(id, password_hash)
            .await?
        {
            return Err(DomainError::not_found("User"));
        }
        info!(user_id = %id, "Password changed");
        Ok(())
    }
}
