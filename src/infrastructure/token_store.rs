//! Token file persistence.
//!
//! File layout:
//!
//! ```text
//! # Generated: 2026-01-02 10:11:12.123456 +01:00
//! # Email: harness@example.com
//! # User ID: 55ee0099-04e7-46df-81ed-7e9a913a6fc5
//!
//! eyJhbGciOiJIUzI1NiIs...
//! ```
//!
//! Comment and blank lines are skipped when reading; the first remaining
//! line is the token. A file holding only a bare token is accepted.

use std::path::Path;

use chrono::{DateTime, Local};

use crate::shared::error::{HarnessError, HarnessResult};

/// Token plus the metadata written alongside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFile {
    pub generated_at: Option<DateTime<Local>>,
    pub email: Option<String>,
    pub user_id: Option<String>,
    pub token: String,
}

impl TokenFile {
    pub fn new(token: impl Into<String>, email: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            generated_at: Some(Local::now()),
            email: Some(email.into()),
            user_id: Some(user_id.into()),
            token: token.into(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(at) = &self.generated_at {
            out.push_str(&format!("# Generated: {}\n", at.format("%Y-%m-%d %H:%M:%S%.6f %:z")));
        }
        if let Some(email) = &self.email {
            out.push_str(&format!("# Email: {}\n", email));
        }
        if let Some(id) = &self.user_id {
            out.push_str(&format!("# User ID: {}\n", id));
        }
        out.push('\n');
        out.push_str(&self.token);
        out.push('\n');
        out
    }

    /// Parse file contents; `origin` names the file in errors
    pub fn parse(contents: &str, origin: &str) -> HarnessResult<Self> {
        let mut file = Self {
            generated_at: None,
            email: None,
            user_id: None,
            token: String::new(),
        };

        for line in contents.lines().map(str::trim) {
            if line.is_empty() {
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                let comment = comment.trim();
                if let Some(v) = comment.strip_prefix("Generated:") {
                    file.generated_at = DateTime::parse_from_str(v.trim(), "%Y-%m-%d %H:%M:%S%.f %:z")
                        .ok()
                        .map(|dt| dt.with_timezone(&Local));
                } else if let Some(v) = comment.strip_prefix("Email:") {
                    file.email = Some(v.trim().to_string());
                } else if let Some(v) = comment.strip_prefix("User ID:") {
                    file.user_id = Some(v.trim().to_string());
                }
                continue;
            }
            file.token = line.to_string();
            return Ok(file);
        }

        Err(HarnessError::MissingToken(origin.to_string()))
    }

    pub async fn write(&self, path: impl AsRef<Path>) -> HarnessResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, self.render()).await?;
        Ok(())
    }

    pub async fn read(path: impl AsRef<Path>) -> HarnessResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await?;
        Self::parse(&contents, &path.display().to_string())
    }
}
