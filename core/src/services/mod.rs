//! Business services containing domain logic and use cases.

pub mod auth;
pub mod banking;
pub mod password;
pub mod token;
pub mod users;

// Re-export commonly used types
pub use auth::{AttemptTracker, AuthService};
pub use banking::BankingService;
pub use password::{BcryptPasswordVerifier, PasswordVerifier};
pub use token::{Claims, JwtTokenIssuer, TokenIssuer};
pub use users::UserService;
