//! Repository interfaces and in-memory reference implementations.
//!
//! The store is an opaque collaborator: the traits here are the whole
//! contract, and every "not found" is an explicit absent result rather than
//! an error. The in-memory implementations back the tests and any
//! single-process deployment.

pub mod account;
pub mod user;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use user::{InMemoryUserRepository, UserRepository};
