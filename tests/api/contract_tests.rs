//! Contract Violation Tests
//!
//! Hand-crafted responses the stub backend never produces.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use workflow_api_harness::application::cases::chat::SendChatMessage;
use workflow_api_harness::application::cases::workflows::{CreateWorkflow, ListWorkflows};
use workflow_api_harness::application::cases::{ApiCase, CaseContext};
use workflow_api_harness::application::dto::{ChatRequest, UpdateWorkflowRequest};
use workflow_api_harness::application::services::TokenProvisioner;
use workflow_api_harness::config::Settings;
use workflow_api_harness::infrastructure::http::ApiClient;
use workflow_api_harness::presentation::token_banner::render_hint;
use workflow_api_harness::shared::error::HarnessError;

const TOKEN: &str = "mock-token";

fn context(server: &MockServer) -> CaseContext {
    let settings = Settings::for_base_url(server.uri());
    let client = ApiClient::new(&settings.api).unwrap().with_token(TOKEN);
    CaseContext::new(client, settings)
}

/// TC004 fails on a whitespace-only conversation id
#[tokio::test]
async fn test_chat_rejects_blank_conversation_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "conversationId": "   ",
            "response": "Sure",
        })))
        .mount(&server)
        .await;

    let err = SendChatMessage.run(&context(&server)).await.unwrap_err();

    assert_eq!(err.to_string(), "'conversationId' is empty");
}

/// TC004 fails when the workflow preview is not an object
#[tokio::test]
async fn test_chat_rejects_non_object_workflow_preview() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "conversationId": "c-1",
            "response": "Sure",
            "workflow": "draft",
        })))
        .mount(&server)
        .await;

    let err = SendChatMessage.run(&context(&server)).await.unwrap_err();

    assert!(err.to_string().starts_with("'workflow' should be an object"));
}

/// TC005 checks every listed workflow for its required keys
#[tokio::test]
async fn test_list_requires_trigger_on_each_entry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "workflows": [
                {"id": "wf-1", "name": "Complete", "trigger": {"type": "manual"}, "steps": []},
                {"id": "wf-2", "name": "No trigger", "steps": []},
            ],
        })))
        .mount(&server)
        .await;

    let err = ListWorkflows.run(&context(&server)).await.unwrap_err();

    assert_eq!(err.to_string(), "Workflow missing 'trigger'");
}

/// A non-JSON body is reported with the endpoint and a snippet
#[tokio::test]
async fn test_non_json_body_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = ListWorkflows.run(&context(&server)).await.unwrap_err();

    match err {
        HarnessError::InvalidJson { endpoint, message } => {
            assert_eq!(endpoint, "GET /api/workflows");
            assert!(message.contains("<html>Bad Gateway</html>"));
        }
        other => panic!("unexpected error: {}", other),
    }
}

/// A failed create still deletes the workflow it returned
#[tokio::test]
async fn test_create_failure_still_cleans_up_returned_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/workflows"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "workflow": {"id": "wf-orphan", "name": "Test Workflow"},
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/workflows/wf-orphan"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let err = CreateWorkflow.run(&context(&server)).await.unwrap_err();

    assert!(err
        .to_string()
        .starts_with("Expected status 200 from POST /api/workflows, got 201"));
    server.verify().await;
}

/// A backend slower than the request timeout fails the case with a transport error
#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"success": true, "conversationId": "c-1", "response": "Sure"}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let mut ctx = context(&server);
    ctx.settings.api.timeout_secs = 1;
    ctx.client = ApiClient::new(&ctx.settings.api).unwrap().with_token(TOKEN);

    let err = SendChatMessage.run(&ctx).await.unwrap_err();

    assert!(matches!(err, HarnessError::Transport { .. }), "{}", err);
    assert!(err.is_timeout());
    assert!(!err.is_connect());
    assert_eq!(
        render_hint(&err, &ctx.settings.api).as_deref(),
        Some(format!("Backend at {} did not answer within 1s", server.uri()).as_str())
    );
}

/// Blank case payloads are rejected locally and never sent
#[tokio::test]
async fn test_invalid_payloads_are_not_sent() {
    let server = MockServer::start().await;
    let client = context(&server).client;

    let err = client.chat(&ChatRequest::new("")).await.unwrap_err();
    assert_eq!(err.to_string(), "Validation error: message: Message must not be empty");

    let update = UpdateWorkflowRequest {
        name: Some(String::new()),
        ..Default::default()
    };
    let err = client.update_workflow("wf-1", &update).await.unwrap_err();
    assert!(matches!(err, HarnessError::Validation(_)), "{}", err);

    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

/// A login envelope without a token reports the backend's own message
#[tokio::test]
async fn test_login_envelope_without_token_reports_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Account locked",
        })))
        .mount(&server)
        .await;
    let settings = Settings::for_base_url(server.uri());
    let client = ApiClient::new(&settings.api).unwrap();

    let err = TokenProvisioner::new(&client, settings.account.clone())
        .provision()
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Login response carries no token: Account locked");
}
