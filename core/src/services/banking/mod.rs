//! Online banking service module
//!
//! Open, read-balance, adjust-balance, and close operations over bank
//! accounts. Every mutation re-verifies the account's own email/password,
//! deliberately stricter than session-based authorization.

mod service;

#[cfg(test)]
mod tests;

pub use service::BankingService;
