//! Login response value object for successful authentication.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response returned after a successful login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// The authenticated user's id
    pub user_id: Uuid,

    /// The authenticated user's email
    pub email: String,

    /// The authenticated user's display name
    pub name: String,

    /// Opaque session token
    pub token: String,

    /// Number of failed attempts that had accumulated before this success
    pub login_attempts: u32,
}
