//! Shared utilities and common types for the BankLine server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures and error codes
//! - Pagination types
//! - Utility functions (email normalization, etc.)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{JwtConfig, ThrottleConfig};
pub use errors::{error_codes, ErrorResponse};
pub use types::{PaginatedResponse, Pagination};
