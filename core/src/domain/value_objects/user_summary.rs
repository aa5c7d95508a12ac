//! Outward-facing projection of a user record.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::User;

/// The only user fields that ever leave the service layer.
///
/// List, search, and detail endpoints all project to this shape; the password
/// hash and timestamps stay inside the core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}
