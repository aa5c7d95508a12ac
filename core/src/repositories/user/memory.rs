//! In-memory implementation of the user repository.
//!
//! Backs tests and single-process deployments. State is a `Vec` behind a
//! `tokio::sync::RwLock`, which keeps insertion order stable for `list` and
//! makes each write method one critical section.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// In-memory user repository
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with users (test convenience)
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        // Uniqueness check and insert under one write lock.
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailTaken);
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email && u.id != user.id) {
            return Err(DomainError::EmailTaken);
        }
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(user)
            }
            None => Err(DomainError::not_found("User")),
        }
    }

    async fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: String,
    ) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.set_password_hash(password_hash);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().any(|u| u.email == email))
    }
}
