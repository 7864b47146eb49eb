//! Token Provisioning Service
//!
//! Logs the test account in, registering it first when the login is
//! refused, and extracts the bearer token from the login response's
//! `data` envelope.
//!
//! Registration is accepted only with `201 Created`, whereas the register
//! case expects `200 OK`. Both expectations are kept as observed.

use reqwest::StatusCode;
use tracing::info;

use crate::application::dto::{ApiEnvelope, AuthPayload, LoginRequest, RegisterRequest};
use crate::config::AccountSettings;
use crate::domain::User;
use crate::infrastructure::http::ApiClient;
use crate::shared::error::{HarnessError, HarnessResult};
use crate::shared::validation::validate_request;

/// Token and account produced by a successful provisioning run
#[derive(Debug, Clone)]
pub struct Provisioned {
    pub token: String,
    pub user: User,
    /// Whether the account had to be registered first
    pub registered: bool,
}

/// Login-or-register flow for the fixed test account
#[derive(Debug, Clone)]
pub struct TokenProvisioner {
    client: ApiClient,
    account: AccountSettings,
}

impl TokenProvisioner {
    pub fn new(client: &ApiClient, account: AccountSettings) -> Self {
        Self {
            client: client.anonymous(),
            account,
        }
    }

    /// Run the flow once; there are no retries.
    ///
    /// # Errors
    ///
    /// - `Validation` if the configured credentials are malformed
    /// - `RegistrationRejected` if register answers anything but 201
    /// - `LoginRejected` if the final login answers anything but 200
    /// - `Transport` if the backend is unreachable
    pub async fn provision(&self) -> HarnessResult<Provisioned> {
        let name = Some(self.account.name.as_str()).filter(|n| !n.trim().is_empty());
        let login = LoginRequest::new(&self.account.email, &self.account.password);
        let register = RegisterRequest::new(&self.account.email, &self.account.password, name);
        validate_request(&login)?;
        validate_request(&register)?;

        info!(email = %self.account.email, "Trying to login");
        let mut resp = self.client.login(&login).await?;
        let mut registered = false;

        if resp.status != StatusCode::OK {
            info!(status = resp.status.as_u16(), "Login refused, registering account");
            let reg = self.client.register(&register).await?;
            if reg.status != StatusCode::CREATED {
                return Err(HarnessError::RegistrationRejected {
                    status: reg.status,
                    body: reg.text,
                });
            }
            info!(email = %self.account.email, "Account registered");
            registered = true;
            resp = self.client.login(&login).await?;
        }

        if resp.status != StatusCode::OK {
            return Err(HarnessError::LoginRejected {
                status: resp.status,
                body: resp.text,
            });
        }

        let envelope: ApiEnvelope<AuthPayload> = resp.decode()?;
        let payload = match envelope.data {
            Some(payload) if envelope.success => payload,
            _ => {
                let reason = envelope
                    .error
                    .or(envelope.message)
                    .unwrap_or_else(|| resp.snippet().to_string());
                return Err(HarnessError::assertion(format!(
                    "Login response carries no token: {}",
                    reason
                )));
            }
        };
        if payload.token.trim().is_empty() {
            return Err(HarnessError::assertion("Login response carries an empty token"));
        }

        info!(user = %payload.user, registered, "Bearer token issued");
        Ok(Provisioned {
            token: payload.token,
            user: payload.user,
            registered,
        })
    }
}
