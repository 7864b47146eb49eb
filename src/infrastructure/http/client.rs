//! HTTP client for the backend under test.

use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde::Serialize;
use tracing::debug;

use super::endpoints;
use super::response::ApiResponse;
use crate::application::dto::{
    ChatRequest, CreateWorkflowRequest, LoginRequest, RegisterRequest, UpdateWorkflowRequest,
};
use crate::config::ApiSettings;
use crate::shared::error::{HarnessError, HarnessResult};
use crate::shared::validation::validate_request;

/// JSON-over-HTTP client with optional bearer authentication.
///
/// Cloning is cheap; the underlying connection pool is shared.
///
/// # Example
///
/// ```ignore
/// use workflow_api_harness::config::ApiSettings;
/// use workflow_api_harness::infrastructure::http::ApiClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::new(&ApiSettings::default())?.with_token("eyJ...");
/// let me = client.me().await?;
/// me.expect_status(reqwest::StatusCode::OK)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Creates an unauthenticated client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(settings: &ApiSettings) -> HarnessResult<Self> {
        let http = Client::builder()
            .timeout(settings.timeout())
            .user_agent(&settings.user_agent)
            .build()
            .map_err(|source| HarnessError::Transport {
                endpoint: settings.base_url.clone(),
                source,
            })?;
        Ok(Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Same client, sending `Authorization: Bearer <token>`
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    /// Same client, without an `Authorization` header
    pub fn anonymous(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    pub async fn register(&self, body: &RegisterRequest) -> HarnessResult<ApiResponse> {
        self.send(Method::POST, endpoints::AUTH_REGISTER, Some(body)).await
    }

    pub async fn login(&self, body: &LoginRequest) -> HarnessResult<ApiResponse> {
        self.send(Method::POST, endpoints::AUTH_LOGIN, Some(body)).await
    }

    pub async fn me(&self) -> HarnessResult<ApiResponse> {
        self.send::<()>(Method::GET, endpoints::AUTH_ME, None).await
    }

    /// Rejects a blank message locally, before anything is sent
    pub async fn chat(&self, body: &ChatRequest) -> HarnessResult<ApiResponse> {
        validate_request(body)?;
        self.send(Method::POST, endpoints::CHAT, Some(body)).await
    }

    pub async fn list_workflows(&self) -> HarnessResult<ApiResponse> {
        self.send::<()>(Method::GET, endpoints::WORKFLOWS, None).await
    }

    pub async fn create_workflow(&self, body: &CreateWorkflowRequest) -> HarnessResult<ApiResponse> {
        validate_request(body)?;
        self.send(Method::POST, endpoints::WORKFLOWS, Some(body)).await
    }

    pub async fn get_workflow(&self, id: &str) -> HarnessResult<ApiResponse> {
        self.send::<()>(Method::GET, &endpoints::workflow(id), None).await
    }

    pub async fn update_workflow(
        &self,
        id: &str,
        body: &UpdateWorkflowRequest,
    ) -> HarnessResult<ApiResponse> {
        validate_request(body)?;
        self.send(Method::PUT, &endpoints::workflow(id), Some(body)).await
    }

    pub async fn delete_workflow(&self, id: &str) -> HarnessResult<ApiResponse> {
        self.send::<()>(Method::DELETE, &endpoints::workflow(id), None).await
    }

    pub async fn execute_workflow(&self, id: &str) -> HarnessResult<ApiResponse> {
        self.send::<()>(Method::POST, &endpoints::workflow_execute(id), None).await
    }

    /// Sends one request and reads the whole body.
    ///
    /// Any status is returned as-is; only transport failures are errors.
    async fn send<B>(&self, method: Method, path: &str, body: Option<&B>) -> HarnessResult<ApiResponse>
    where
        B: Serialize + ?Sized,
    {
        let endpoint = format!("{} {}", method, path);
        let mut req = self
            .http
            .request(method, format!("{}{}", self.base_url, path))
            .header(ACCEPT, "application/json");

        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(|source| HarnessError::Transport {
            endpoint: endpoint.clone(),
            source,
        })?;
        let status = resp.status();
        let text = resp.text().await.map_err(|source| HarnessError::Transport {
            endpoint: endpoint.clone(),
            source,
        })?;

        debug!(endpoint = %endpoint, status = status.as_u16(), bytes = text.len(), "Response received");
        Ok(ApiResponse::new(endpoint, status, text))
    }
}
