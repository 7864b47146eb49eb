//! Harness settings and configuration structures.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use reqwest::Url;
use serde::Deserialize;

/// Root configuration structure containing all harness settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Target backend (base URL, timeout)
    pub api: ApiSettings,

    /// Bearer token sources
    pub auth: AuthSettings,

    /// Test account used for token provisioning and the login case
    pub account: AccountSettings,

    /// Case selection
    #[serde(default)]
    pub harness: HarnessSettings,

    /// Current environment (development, staging, ...)
    pub environment: String,
}

/// Target backend configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the backend, without the `/api` prefix
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

/// Where the bearer token for the cases comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    /// Explicit token, takes precedence over the token file
    pub token: Option<String>,

    /// Token file written by `get-token`
    pub token_file: String,
}

/// Credentials of the fixed test account.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountSettings {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Case selection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarnessSettings {
    /// Case ids to run; empty runs everything
    #[serde(default)]
    pub only: Vec<String>,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TOKEN_FILE: &str = "test_token.txt";

fn default_user_agent() -> String {
    concat!("workflow-api-harness/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Settings {
    /// Load settings from environment variables and configuration files.
    ///
    /// The loading order is:
    /// 1. built-in defaults
    /// 2. config/default.toml and config/{RUN_ENV}.toml
    /// 3. `APP__SECTION__KEY` environment variables
    /// 4. shortcut variables (`API_BASE_URL`, `API_TOKEN`, ...)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if configuration cannot be loaded or parsed,
    /// or if the base URL or timeout is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        Config::builder()
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", DEFAULT_BASE_URL)?
            .set_default("api.timeout_secs", DEFAULT_TIMEOUT_SECS)?
            .set_default("api.user_agent", default_user_agent())?
            .set_default("auth.token_file", DEFAULT_TOKEN_FILE)?
            .set_default("account.email", "harness@example.com")?
            .set_default("account.password", "12345678")?
            .set_default("account.name", "Harness")?
            .set_default("harness.only", Vec::<String>::new())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // APP__API__BASE_URL=http://... -> api.base_url
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("harness.only")
                    .try_parsing(true),
            )
            .set_override_option("api.base_url", std::env::var("API_BASE_URL").ok())?
            .set_override_option("auth.token", std::env::var("API_TOKEN").ok())?
            .set_override_option("auth.token_file", std::env::var("TOKEN_FILE").ok())?
            .set_override_option("account.email", std::env::var("TEST_EMAIL").ok())?
            .set_override_option("account.password", std::env::var("TEST_PASSWORD").ok())?
            .build()?
            .try_deserialize()
            .and_then(|settings: Self| settings.validate().map(|_| settings))
    }

    /// Settings pointing at `base_url` with every other value defaulted.
    pub fn for_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiSettings {
                base_url: base_url.into(),
                ..ApiSettings::default()
            },
            auth: AuthSettings::default(),
            account: AccountSettings::default(),
            harness: HarnessSettings::default(),
            environment: "test".into(),
        }
    }

    /// Reject settings that would make every request fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Message(format!("api.base_url '{}' is invalid: {}", self.api.base_url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Message(format!(
                "api.base_url must be http or https, got '{}'",
                url.scheme()
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "api.timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl ApiSettings {
    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token: None,
            token_file: DEFAULT_TOKEN_FILE.into(),
        }
    }
}

impl Default for AccountSettings {
    fn default() -> Self {
        Self {
            email: "harness@example.com".into(),
            password: "12345678".into(),
            name: "Harness".into(),
        }
    }
}
