//! Authentication service module
//!
//! Provides credential verification with login throttling:
//! - Per-identity failed-attempt tracking with a rolling lockout window
//! - Timing-attack-resistant credential checks
//! - Session token issuance on success

mod attempt_tracker;
mod service;

#[cfg(test)]
pub(crate) mod tests;

pub use attempt_tracker::AttemptTracker;
pub use service::AuthService;
