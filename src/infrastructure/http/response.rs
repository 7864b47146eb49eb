//! Captured HTTP response.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::error::{HarnessError, HarnessResult};
use crate::shared::expect::JsonObject;

const SNIPPET_LIMIT: usize = 512;

/// Status and body of a completed request, read fully into memory.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// `METHOD /path`, used in failure messages
    pub endpoint: String,
    pub status: StatusCode,
    pub text: String,
}

impl ApiResponse {
    pub fn new(endpoint: impl Into<String>, status: StatusCode, text: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            status,
            text: text.into(),
        }
    }

    /// Body truncated for log and failure messages
    pub fn snippet(&self) -> &str {
        if self.text.len() <= SNIPPET_LIMIT {
            return &self.text;
        }
        let mut end = SNIPPET_LIMIT;
        while !self.text.is_char_boundary(end) {
            end -= 1;
        }
        &self.text[..end]
    }

    /// Require an exact status code
    pub fn expect_status(&self, expected: StatusCode) -> HarnessResult<()> {
        self.expect_status_in(&[expected])
    }

    /// Require one of several acceptable status codes
    pub fn expect_status_in(&self, accepted: &[StatusCode]) -> HarnessResult<()> {
        if accepted.contains(&self.status) {
            return Ok(());
        }
        let expected = accepted
            .iter()
            .map(|s| s.as_u16().to_string())
            .collect::<Vec<_>>()
            .join("/");
        Err(HarnessError::assertion(format!(
            "Expected status {} from {}, got {}: {}",
            expected,
            self.endpoint,
            self.status.as_u16(),
            self.snippet()
        )))
    }

    /// Whether the body is empty or whitespace
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Parse the body as JSON
    pub fn json(&self) -> HarnessResult<Value> {
        serde_json::from_str(&self.text).map_err(|e| HarnessError::InvalidJson {
            endpoint: self.endpoint.clone(),
            message: format!("{} (body: {})", e, self.snippet()),
        })
    }

    /// Parse the body as a JSON object
    pub fn object(&self) -> HarnessResult<JsonObject> {
        match self.json()? {
            Value::Object(map) => Ok(map),
            other => Err(HarnessError::assertion(format!(
                "Response from {} is not a JSON object: {}",
                self.endpoint, other
            ))),
        }
    }

    /// Deserialize the body into a typed DTO
    pub fn decode<T: DeserializeOwned>(&self) -> HarnessResult<T> {
        serde_json::from_str(&self.text).map_err(|e| HarnessError::InvalidJson {
            endpoint: self.endpoint.clone(),
            message: e.to_string(),
        })
    }
}
