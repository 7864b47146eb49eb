//! Response DTOs
//!
//! Typed views of response bodies, used where the harness consumes a
//! response rather than checking its shape.

use serde::Deserialize;

use crate::domain::User;

/// `{success, data, error, message}` envelope
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,

    pub data: Option<T>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Token and user returned inside `data` by login
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}
