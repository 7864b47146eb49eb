//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Serialize;
use validator::Validate;

use crate::domain::{Step, Trigger};

/// Registration request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct RegisterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Chat message request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Message must not be empty"))]
    pub message: String,
}

/// Create workflow request
#[derive(Debug, Clone, Serialize, Validate)]
pub struct CreateWorkflowRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    pub description: String,

    pub trigger: Trigger,

    pub steps: Vec<Step>,
}

/// Update workflow request; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct UpdateWorkflowRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl RegisterRequest {
    pub fn new(email: &str, password: &str, name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl ChatRequest {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
        }
    }
}
