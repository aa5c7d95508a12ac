//! Bank account entity for the online banking sub-system.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An online banking account.
///
/// Bank accounts live in their own namespace: the email is unique across bank
/// accounts but independent of the user namespace. Balance mutations go
/// through [`crate::repositories::AccountRepository::adjust_balance`] so that
/// concurrent adjustments on the same account cannot interleave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Account holder name
    pub name: String,

    /// Normalized email address, unique across bank accounts
    pub email: String,

    /// Password hash produced by the configured verifier
    pub password_hash: String,

    /// Current balance; signed, decimal-exact
    pub balance: Decimal,

    /// Timestamp when the account was opened
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl BankAccount {
    /// Creates a new BankAccount with a fresh id
    pub fn new(name: String, email: String, password_hash: String, balance: Decimal) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            balance,
            created_at: now,
            updated_at: now,
        }
    }
}
