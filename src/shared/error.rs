//! Harness Error Types
//!
//! Centralized error handling for cases, the HTTP client and the token utility.

use reqwest::StatusCode;

/// Harness error type
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    Assertion(String),

    #[error("Invalid JSON from {endpoint}: {message}")]
    InvalidJson { endpoint: String, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Registration failed with status {status}: {body}")]
    RegistrationRejected { status: StatusCode, body: String },

    #[error("Login failed with status {status}: {body}")]
    LoginRejected { status: StatusCode, body: String },

    #[error("Token file error: {0}")]
    TokenFile(#[from] std::io::Error),

    #[error("No bearer token found in {0}")]
    MissingToken(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl HarnessError {
    /// Build an assertion failure from a message
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }

    /// Whether the failure is a refused or unreachable connection
    pub fn is_connect(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_connect(),
            _ => false,
        }
    }

    /// Whether the failure is a per-request timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

/// Result alias used throughout the harness
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Fail the current case with a formatted message unless `cond` holds.
///
/// ```rust,ignore
/// check!(status == 200, "Expected status 200, got {}", status);
/// ```
#[macro_export]
macro_rules! check {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::shared::error::HarnessError::Assertion(format!($($arg)+)));
        }
    };
}
