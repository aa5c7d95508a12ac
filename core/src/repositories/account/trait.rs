//! Bank account repository trait.
//!
//! Bank accounts are a namespace of their own: email uniqueness here is
//! independent of the user repository. Balance mutation is exposed only as
//! an atomic adjustment so the read-modify-write cannot race.

use async_trait::async_trait;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::BankAccount;
use crate::errors::DomainError;

/// Repository contract for [`BankAccount`] persistence.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BankAccount>, DomainError>;

    /// Find an account by normalized email.
    async fn find_by_email(&self, email: &str) -> Result<Option<BankAccount>, DomainError>;

    /// Persist a new account.
    ///
    /// Fails with [`DomainError::EmailTaken`] if the email already exists in
    /// the bank-account namespace; check and insert are one critical section.
    async fn create(&self, account: BankAccount) -> Result<BankAccount, DomainError>;

    /// Apply `delta` (negative for withdrawals) to the account's balance as
    /// one atomic step and return the new balance.
    ///
    /// Returns `None` if the id is unknown. Concurrent adjustments on the
    /// same id serialize; distinct ids proceed in parallel subject only to
    /// the store's own locking.
    async fn adjust_balance(
        &self,
        id: Uuid,
        delta: Decimal,
    ) -> Result<Option<Decimal>, DomainError>;

    /// Delete an account. Returns `false` if the id is unknown.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
