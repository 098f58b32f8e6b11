//! User model for storage and API.

use serde::{Deserialize, Serialize};

/// User account stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Assigned as user count + 1 at creation (also the map key)
    pub id: u64,
    /// Unique across all users, compared case-sensitively
    pub email: String,
    /// bcrypt hash of the password
    #[serde(rename = "password")]
    pub password_hash: String,
    /// Legacy field, always written; absent in some older documents
    #[serde(default)]
    pub token: String,
    /// Set by the payment provider's upgrade event; never reverts
    #[serde(rename = "is_chirpy_red", default)]
    pub is_upgraded: bool,
}

/// Public view of a user (never exposes the password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: u64,
    pub email: String,
    pub is_chirpy_red: bool,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            is_chirpy_red: user.is_upgraded,
        }
    }
}
