//! Common type definitions shared across server modules.

pub mod pagination;

pub use pagination::{PaginatedResponse, Pagination};
