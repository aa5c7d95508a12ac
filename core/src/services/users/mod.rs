//! User account service module
//!
//! User CRUD plus the list pipeline: search filtering, sorting, and
//! pagination over the user collection.

pub mod query;
mod service;

#[cfg(test)]
mod tests;

pub use query::{SearchFilter, SortOrder, SortSpec, UserField};
pub use service::UserService;
