//! User entity representing a registered user account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user.
///
/// The email is stored in normalized (lowercased) form and is unique across
/// users. The password hash never leaves the service layer; outward-facing
/// reads go through [`crate::domain::value_objects::UserSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Normalized email address, unique across users
    pub email: String,

    /// Password hash produced by the configured verifier
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User with a fresh id
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the profile fields
    pub fn update_profile(&mut self, name: String, email: String) {
        self.name = name;
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
