//! Configuration types shared between the domain and transport layers.

pub mod auth;
pub mod token;

pub use auth::ThrottleConfig;
pub use token::JwtConfig;
