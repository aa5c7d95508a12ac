//! Outward-facing projection of a bank account.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::BankAccount;

/// Bank account fields returned by the banking service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub balance: Decimal,
}

impl From<&BankAccount> for AccountSummary {
    fn from(account: &BankAccount) -> Self {
        Self {
            id: account.id,
            name: account.name.clone(),
            email: account.email.clone(),
            balance: account.balance,
        }
    }
}
