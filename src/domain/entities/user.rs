//! User entity.
//!
//! The backend owns users; the harness only reads the public projection
//! returned by register, login and the current-user lookup.

use serde::{Deserialize, Serialize};

/// Fields that must never appear in a serialized user
pub const SECRET_USER_FIELDS: [&str; 2] = ["password", "password_hash"];

/// Public view of a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier
    pub id: String,

    /// Email address (unique)
    pub email: String,

    /// Display name, optional at registration
    #[serde(default)]
    pub name: Option<String>,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.id, self.email)
    }
}
