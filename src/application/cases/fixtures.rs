//! Request payloads used by the cases.

use serde_json::json;
use uuid::Uuid;

use crate::application::dto::{CreateWorkflowRequest, UpdateWorkflowRequest};
use crate::domain::{Step, Trigger};

pub const TEST_USER_NAME: &str = "Test User";
pub const TEST_USER_PASSWORD: &str = "SecurePass123!";
pub const WRONG_PASSWORD: &str = "WrongPassword!";
pub const INVALID_TOKEN: &str = "invalidtoken123";
pub const NONEXISTENT_WORKFLOW_ID: &str = "00000000-0000-0000-0000-000000000000";
pub const CHAT_MESSAGE: &str =
    "Hello AI, please help me create a workflow to send reminder emails.";

/// `testuser_<8 hex>@example.com`
pub fn unique_email() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("testuser_{}@example.com", &id[..8])
}

/// Two-step workflow in the `type`/`configuration` spelling
pub fn http_and_email_workflow() -> CreateWorkflowRequest {
    CreateWorkflowRequest {
        name: "Test Workflow".into(),
        description: "This is a test workflow created by automated test.".into(),
        trigger: Trigger::Manual,
        steps: vec![
            Step::typed(
                "httpRequest",
                json!({"method": "GET", "url": "https://jsonplaceholder.typicode.com/todos/1"}),
            )
            .with_id("step1"),
            Step::typed(
                "email",
                json!({
                    "to": "test@example.com",
                    "subject": "Test Workflow Email",
                    "body": "This is a test email sent by the workflow."
                }),
            )
            .with_id("step2"),
        ],
    }
}

/// Manual workflow with no steps
pub fn empty_workflow(name: &str, description: &str) -> CreateWorkflowRequest {
    CreateWorkflowRequest {
        name: name.into(),
        description: description.into(),
        trigger: Trigger::Manual,
        steps: Vec::new(),
    }
}

/// Manual workflow named with a fresh uuid
pub fn disposable_workflow() -> CreateWorkflowRequest {
    empty_workflow(
        &format!("Test Delete Workflow {}", Uuid::new_v4()),
        "Workflow created for deletion test",
    )
}

/// One-step workflow in the `action`/`config` spelling
pub fn initial_workflow() -> CreateWorkflowRequest {
    CreateWorkflowRequest {
        name: "Initial Workflow".into(),
        description: "Initial workflow description".into(),
        trigger: Trigger::Manual,
        steps: vec![Step::action("http_request", json!({"url": "https://example.com"}))
            .with_id("step1")
            .with_name("Step One")],
    }
}

/// Full replacement for [`initial_workflow`]: scheduled, two steps, disabled
pub fn workflow_update() -> UpdateWorkflowRequest {
    UpdateWorkflowRequest {
        name: Some("Updated Workflow Name".into()),
        description: Some("Updated description for the workflow".into()),
        trigger: Some(Trigger::Schedule {
            cron: "0 12 * * *".into(),
        }),
        steps: Some(vec![
            Step::action("http_request", json!({"url": "https://updated.example.com"}))
                .with_id("step1")
                .with_name("Step One Modified"),
            Step::action("email", json!({"to": "user@example.com", "subject": "Test"}))
                .with_id("step2")
                .with_name("Step Two"),
        ]),
        enabled: Some(false),
    }
}

/// One-step workflow in the `type`/`config` spelling
pub fn executable_workflow() -> CreateWorkflowRequest {
    CreateWorkflowRequest {
        name: "Test Workflow for Manual Execution".into(),
        description: "Workflow created for test case TC010".into(),
        trigger: Trigger::Manual,
        steps: vec![Step::typed(
            "http_request",
            json!({"method": "GET", "url": "https://httpbin.org/get"}),
        )
        .with_name("Sample Step")
        .with_short_config()],
    }
}
