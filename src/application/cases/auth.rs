//! Authentication cases: register, login, current user.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use tracing::debug;

use super::fixtures::{self, INVALID_TOKEN, TEST_USER_NAME, TEST_USER_PASSWORD, WRONG_PASSWORD};
use super::{ApiCase, CaseContext};
use crate::application::dto::{LoginRequest, RegisterRequest};
use crate::domain::SECRET_USER_FIELDS;
use crate::shared::error::HarnessResult;
use crate::shared::expect::{
    bool_field, expect_failure, expect_success, field_equals, has_any_key, non_empty_str,
    object_field, require_absent,
};

/// TC001: a fresh registration echoes the user, hides the password and can log in.
pub struct RegisterUser;

#[async_trait]
impl ApiCase for RegisterUser {
    fn id(&self) -> &'static str {
        "TC001"
    }

    fn title(&self) -> &'static str {
        "POST /api/auth/register registers a new user"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let client = ctx.anonymous();
        let email = fixtures::unique_email();
        let payload = RegisterRequest::new(&email, TEST_USER_PASSWORD, Some(TEST_USER_NAME));

        let resp = client.register(&payload).await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        expect_success(&body)?;

        let user = object_field(&body, "user")?;
        non_empty_str(user, "id")?;
        field_equals(user, "name", &json!(TEST_USER_NAME))?;
        field_equals(user, "email", &json!(email))?;
        non_empty_str(&body, "token")?;
        for field in SECRET_USER_FIELDS {
            require_absent(user, field, "user object")?;
        }

        // The stored password must still authenticate
        let resp = client
            .login(&LoginRequest::new(&email, TEST_USER_PASSWORD))
            .await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        expect_success(&body)?;
        non_empty_str(&body, "token")?;

        debug!(email = %email, "Registered user logged in");
        Ok(())
    }
}

/// TC002: valid credentials log in; a wrong password is rejected with an error body.
pub struct LoginUser;

#[async_trait]
impl ApiCase for LoginUser {
    fn id(&self) -> &'static str {
        "TC002"
    }

    fn title(&self) -> &'static str {
        "POST /api/auth/login accepts valid and rejects invalid credentials"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let client = ctx.anonymous();
        let account = &ctx.settings.account;

        let resp = client
            .login(&LoginRequest::new(&account.email, &account.password))
            .await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        expect_success(&body)?;
        object_field(&body, "user")?;
        non_empty_str(&body, "token")?;

        let resp = client
            .login(&LoginRequest::new(&account.email, WRONG_PASSWORD))
            .await?;
        resp.expect_status_in(&[
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::FORBIDDEN,
        ])?;
        let body = resp.object()?;
        expect_failure(&body)?;
        has_any_key(&body, &["error", "message", "errors"], "Error message")?;

        Ok(())
    }
}

/// TC003: the current user needs a valid bearer token.
pub struct CurrentUser;

#[async_trait]
impl ApiCase for CurrentUser {
    fn id(&self) -> &'static str {
        "TC003"
    }

    fn title(&self) -> &'static str {
        "GET /api/auth/me returns the authenticated user"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let resp = ctx.client.me().await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        crate::check!(
            bool_field(&body, "success")?,
            "API returned success:false unexpectedly"
        );
        let user = object_field(&body, "user")?;
        non_empty_str(user, "email")?;

        let denied = [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN];

        let resp = ctx.anonymous().me().await?;
        resp.expect_status_in(&denied)?;

        let resp = ctx.client.with_token(INVALID_TOKEN).me().await?;
        resp.expect_status_in(&denied)?;

        Ok(())
    }
}
