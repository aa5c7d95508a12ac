//! Value objects returned by the service layer.

pub mod account_summary;
pub mod login_response;
pub mod user_summary;

// Re-export commonly used types
pub use account_summary::AccountSummary;
pub use login_response::LoginResponse;
pub use user_summary::UserSummary;
