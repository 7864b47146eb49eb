//! Bearer Token Resolution
//!
//! Picks the token the cases run with: explicit setting, then the token
//! file, then a fresh provisioning run that is kept in memory only.

use std::fmt;

use tracing::{debug, info};

use super::token_service::TokenProvisioner;
use crate::config::Settings;
use crate::infrastructure::http::ApiClient;
use crate::infrastructure::token_store::TokenFile;
use crate::shared::error::HarnessResult;

/// Where a resolved token came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    Settings,
    TokenFile(String),
    Provisioned,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings => write!(f, "settings"),
            Self::TokenFile(path) => write!(f, "token file {}", path),
            Self::Provisioned => write!(f, "login"),
        }
    }
}

/// A token plus its origin
#[derive(Debug, Clone)]
pub struct ResolvedToken {
    pub token: String,
    pub source: TokenSource,
}

/// Resolve the bearer token for a run.
///
/// # Errors
///
/// Fails if the token file exists but holds no token, or if provisioning fails.
pub async fn resolve_token(settings: &Settings, client: &ApiClient) -> HarnessResult<ResolvedToken> {
    if let Some(token) = settings.auth.token.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        return Ok(ResolvedToken {
            token: token.to_string(),
            source: TokenSource::Settings,
        });
    }

    let path = &settings.auth.token_file;
    if tokio::fs::try_exists(path).await? {
        let file = TokenFile::read(path).await?;
        debug!(path = %path, email = ?file.email, "Token file loaded");
        return Ok(ResolvedToken {
            token: file.token,
            source: TokenSource::TokenFile(path.clone()),
        });
    }

    info!(path = %path, "No token configured or saved, logging in");
    let provisioned = TokenProvisioner::new(client, settings.account.clone())
        .provision()
        .await?;
    Ok(ResolvedToken {
        token: provisioned.token,
        source: TokenSource::Provisioned,
    })
}
