//! Domain entities representing core business objects.

pub mod bank_account;
pub mod user;

// Re-export commonly used types
pub use bank_account::BankAccount;
pub use user::User;
