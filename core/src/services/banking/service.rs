//! Online banking service implementation

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use bl_shared::utils::email;

use crate::domain::entities::BankAccount;
use crate::domain::value_objects::AccountSummary;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordVerifier;

/// Filler hashed at construction for the balance-read path, mirroring the
/// authenticator's unknown-email mitigation.
const FALLBACK_PASSWORD_FILLER: &str = "<fallback-account-filler>";

/// Service for the online banking sub-system.
///
/// Bank accounts form their own namespace: email uniqueness is independent
/// of the user collection and the two are never merged.
pub struct BankingService<A, P>
where
    A: AccountRepository,
    P: PasswordVerifier,
{
    account_repository: Arc<A>,
    verifier: Arc<P>,
    /// Placeholder hash verified against when an email lookup misses
    fallback_hash: String,
}

impl<A, P> BankingService<A, P>
where
    A: AccountRepository,
    P: PasswordVerifier,
{
    /// Create a new banking service
    pub fn new(account_repository: Arc<A>, verifier: Arc<P>) -> DomainResult<Self> {
        let fallback_hash = verifier.hash(FALLBACK_PASSWORD_FILLER)?;
        Ok(Self {
            account_repository,
            verifier,
            fallback_hash,
        })
    }

    /// Open a new bank account with an initial balance.
    ///
    /// Fails with [`DomainError::EmailTaken`] if the normalized email is
    /// already used by a bank account; users may share the email freely.
    pub async fn open_account(
        &self,
        name: &str,
        email_addr: &str,
        password: &str,
        initial_balance: Decimal,
    ) -> DomainResult<AccountSummary> {
        let password_hash = self.verifier.hash(password)?;
        let account = BankAccount::new(
            name.to_string(),
            email::normalize(email_addr),
            password_hash,
            initial_balance,
        );

        let created = self.account_repository.create(account).await?;
        info!(account_id = %created.id, "Bank account opened");
        Ok(AccountSummary::from(&created))
    }

    /// Read the balance for an account addressed by email.
    ///
    /// Fails with a uniform [`DomainError::InvalidCredentials`] whether the
    /// email is unknown or the password is wrong; the unknown-email path
    /// still costs one verifier call against the placeholder hash.
    pub async fn balance_of(&self, email_addr: &str, password: &str) -> DomainResult<Decimal> {
        let account = self
            .account_repository
            .find_by_email(&email::normalize(email_addr))
            .await?;
        let stored_hash = account
            .as_ref()
            .map(|a| a.password_hash.as_str())
            .unwrap_or(&self.fallback_hash);

        let password_matched = self.verifier.matches(password, stored_hash)?;

        match account {
            Some(account) if password_matched => Ok(account.balance),
            _ => Err(DomainError::InvalidCredentials),
        }
    }

    /// Apply a signed amount to an account's balance (negative for
    /// withdrawal) and return the new balance.
    ///
    /// Fails with [`DomainError::NotFound`] for an unknown id and
    /// [`DomainError::InvalidPassword`] for a wrong password. The balance
    /// read-modify-write happens atomically at the store, so concurrent
    /// adjustments on the same account cannot lose updates.
    pub async fn adjust_balance(
        &self,
        id: Uuid,
        email_addr: &str,
        password: &str,
        amount: Decimal,
    ) -> DomainResult<Decimal> {
        let account = self
            .account_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("BankAccount"))?;

        if !self.verifier.matches(password, &account.password_hash)? {
            return Err(DomainError::InvalidPassword);
        }

        // The email is part of the call contract but authorization is by
        // password; mismatches are not a failure condition here.
        let _ = email_addr;

        let new_balance = self
            .account_repository
            .adjust_balance(id, amount)
            .await?
            .ok_or_else(|| DomainError::not_found("BankAccount"))?;

        info!(account_id = %id, "Balance adjusted");
        Ok(new_balance)
    }

    /// Close an account.
    ///
    /// The supplied email must equal the stored one ([`DomainError::EmailMismatch`]
    /// otherwise) and the password must verify ([`DomainError::InvalidPassword`]).
    pub async fn close_account(
        &self,
        id: Uuid,
        email_addr: &str,
        password: &str,
    ) -> DomainResult<()> {
        let account = self
            .account_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("BankAccount"))?;

        if email::normalize(email_addr) != account.email {
            return Err(DomainError::EmailMismatch);
        }

        if !self.verifier.matches(password, &account.password_hash)? {
            return Err(DomainError::InvalidPassword);
        }

        if !self.account_repository.delete(id).await? {
            return Err(DomainError::not_found("BankAccount"));
        }
        info!(account_id = %id, "Bank account closed");
        Ok(())
    }
}
