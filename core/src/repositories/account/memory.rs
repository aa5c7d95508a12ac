//! In-memory implementation of the bank account repository.

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::BankAccount;
use crate::errors::DomainError;

use super::trait_::AccountRepository;

/// In-memory bank account repository
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<Vec<BankAccount>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BankAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<BankAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn create(&self, account: BankAccount) -> Result<BankAccount, DomainError> {
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(DomainError::EmailTaken);
        }
        accounts.push(account.clone());
        Ok(account)
    }

    async fn adjust_balance(
        &self,
        id: Uuid,
        delta: Decimal,
    ) -> Result<Option<Decimal>, DomainError> {
        // Read-modify-write under the write lock; concurrent adjustments on
        // the same account serialize here.
        let mut accounts = self.accounts.write().await;
        match accounts.iter_mut().find(|a| a.id == id) {
            Some(account) => {
                account.balance += delta;
                account.updated_at = Utc::now();
                Ok(Some(account.balance))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        let before = accounts.len();
        accounts.retain(|a| a.id != id);
        Ok(accounts.len() < before)
    }
}
