//! Workflow cases: list, create, get, update, delete, execute.
//!
//! Cases that need a workflow create their own and hand its id to
//! [`cleanup::delete_created`] once the exercise is over, pass or fail.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::debug;

use super::fixtures::{self, NONEXISTENT_WORKFLOW_ID};
use super::{cleanup, ApiCase, CaseContext};
use crate::application::dto::CreateWorkflowRequest;
use crate::check;
use crate::shared::error::{HarnessError, HarnessResult};
use crate::shared::expect::{
    array_field, as_object, expect_failure, expect_success, field_equals, non_empty_str,
    object_field, require_key, JsonObject,
};

/// Setup creates may answer 200 or 201 where the case allows it
const CREATED_OR_OK: [StatusCode; 2] = [StatusCode::OK, StatusCode::CREATED];

/// Id of `body.workflow`, if the response carries one
fn workflow_id_of(body: &JsonObject) -> Option<String> {
    body.get("workflow")
        .and_then(|w| w.get("id"))
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Create a prerequisite workflow.
///
/// `created` is filled as soon as the response names an id, before any
/// other check, so cleanup can find it even when a later check fails.
async fn create_workflow(
    ctx: &CaseContext,
    payload: &CreateWorkflowRequest,
    accepted: &[StatusCode],
    created: &mut Option<String>,
) -> HarnessResult<JsonObject> {
    let resp = ctx.client.create_workflow(payload).await?;
    let body = resp.object();
    if let Ok(body) = &body {
        *created = workflow_id_of(body);
    }

    resp.expect_status_in(accepted)?;
    let body = body?;
    expect_success(&body)?;
    let workflow = object_field(&body, "workflow")?.clone();
    let id = non_empty_str(&workflow, "id")?;
    debug!(workflow_id = %id, "Workflow created");
    Ok(workflow)
}

/// TC005: listing returns an array of workflow objects.
pub struct ListWorkflows;

#[async_trait]
impl ApiCase for ListWorkflows {
    fn id(&self) -> &'static str {
        "TC005"
    }

    fn title(&self) -> &'static str {
        "GET /api/workflows lists the user's workflows"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let resp = ctx.client.list_workflows().await?;
        check!(
            resp.status.is_success(),
            "List request failed with status {}: {}",
            resp.status.as_u16(),
            resp.snippet()
        );

        let body = resp.object()?;
        expect_success(&body)?;
        let workflows = array_field(&body, "workflows")?;
        for entry in workflows {
            let workflow = as_object(entry, "Each workflow")?;
            for key in ["id", "name", "trigger", "steps"] {
                require_key(workflow, key, "Workflow")?;
            }
        }

        debug!(count = workflows.len(), "Workflows listed");
        Ok(())
    }
}

/// TC006: creation echoes the submitted workflow with a new id.
pub struct CreateWorkflow;

impl CreateWorkflow {
    async fn exercise(&self, ctx: &CaseContext, created: &mut Option<String>) -> HarnessResult<()> {
        let payload = fixtures::http_and_email_workflow();
        let workflow = create_workflow(ctx, &payload, &[StatusCode::OK], created).await?;

        field_equals(&workflow, "name", &json!(payload.name))?;
        field_equals(&workflow, "description", &json!(payload.description))?;
        object_field(&workflow, "trigger")?;
        array_field(&workflow, "steps")?;
        Ok(())
    }
}

#[async_trait]
impl ApiCase for CreateWorkflow {
    fn id(&self) -> &'static str {
        "TC006"
    }

    fn title(&self) -> &'static str {
        "POST /api/workflows creates a workflow"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let mut created = None;
        let outcome = self.exercise(ctx, &mut created).await;
        cleanup::delete_created(&ctx.client, created.as_deref()).await;
        outcome
    }
}

/// TC007: a workflow can be fetched by id; an unknown id is reported as not found.
pub struct GetWorkflowById;

impl GetWorkflowById {
    async fn exercise(&self, ctx: &CaseContext, created: &mut Option<String>) -> HarnessResult<()> {
        let payload = fixtures::empty_workflow(
            "Test Workflow TC007",
            "Workflow created for testing get specific workflow by ID",
        );
        let workflow = create_workflow(ctx, &payload, &CREATED_OR_OK, created).await?;
        let id = non_empty_str(&workflow, "id")?;

        let resp = ctx.client.get_workflow(id).await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        expect_success(&body)?;
        let fetched = object_field(&body, "workflow")?;
        field_equals(fetched, "id", &json!(id))?;
        field_equals(fetched, "name", &json!(payload.name))?;

        // 404 alone is enough; otherwise the body must not claim success
        let resp = ctx.client.get_workflow(NONEXISTENT_WORKFLOW_ID).await?;
        if resp.status != StatusCode::NOT_FOUND {
            resp.expect_status_in(&[StatusCode::OK, StatusCode::BAD_REQUEST, StatusCode::NOT_FOUND])?;
            let body = resp.object()?;
            if body.contains_key("success") {
                expect_failure(&body)?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ApiCase for GetWorkflowById {
    fn id(&self) -> &'static str {
        "TC007"
    }

    fn title(&self) -> &'static str {
        "GET /api/workflows/{id} returns one workflow"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let mut created = None;
        let outcome = self.exercise(ctx, &mut created).await;
        cleanup::delete_created(&ctx.client, created.as_deref()).await;
        outcome
    }
}

/// TC008: an update returns exactly the submitted fields.
pub struct UpdateWorkflow;

impl UpdateWorkflow {
    async fn exercise(&self, ctx: &CaseContext, created: &mut Option<String>) -> HarnessResult<()> {
        let workflow =
            create_workflow(ctx, &fixtures::initial_workflow(), &[StatusCode::OK], created).await?;
        let id = non_empty_str(&workflow, "id")?;

        let update = fixtures::workflow_update();
        let expected = match serde_json::to_value(&update) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                return Err(HarnessError::assertion(format!(
                    "Update payload is not an object: {}",
                    other
                )))
            }
            Err(e) => {
                return Err(HarnessError::assertion(format!(
                    "Failed to encode update payload: {}",
                    e
                )))
            }
        };

        let resp = ctx.client.update_workflow(id, &update).await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        expect_success(&body)?;
        let updated = object_field(&body, "workflow")?;

        for (key, value) in &expected {
            field_equals(updated, key, value)?;
        }
        Ok(())
    }
}

#[async_trait]
impl ApiCase for UpdateWorkflow {
    fn id(&self) -> &'static str {
        "TC008"
    }

    fn title(&self) -> &'static str {
        "PUT /api/workflows/{id} updates a workflow"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let mut created = None;
        let outcome = self.exercise(ctx, &mut created).await;
        cleanup::delete_created(&ctx.client, created.as_deref()).await;
        outcome
    }
}

/// TC009: a deleted workflow disappears from the listing.
pub struct DeleteWorkflow;

impl DeleteWorkflow {
    async fn exercise(&self, ctx: &CaseContext, created: &mut Option<String>) -> HarnessResult<()> {
        let workflow =
            create_workflow(ctx, &fixtures::disposable_workflow(), &CREATED_OR_OK, created).await?;
        let id = non_empty_str(&workflow, "id")?.to_string();

        let resp = ctx.client.delete_workflow(&id).await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        expect_success(&body)?;
        // Already gone; nothing left for cleanup
        *created = None;

        let resp = ctx.client.list_workflows().await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        expect_success(&body)?;
        let still_listed = body
            .get("workflows")
            .and_then(Value::as_array)
            .map(|all| {
                all.iter()
                    .any(|wf| wf.get("id").and_then(Value::as_str) == Some(id.as_str()))
            })
            .unwrap_or(false);
        check!(!still_listed, "Deleted workflow {} is still listed", id);
        Ok(())
    }
}

#[async_trait]
impl ApiCase for DeleteWorkflow {
    fn id(&self) -> &'static str {
        "TC009"
    }

    fn title(&self) -> &'static str {
        "DELETE /api/workflows/{id} deletes a workflow"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let mut created = None;
        let outcome = self.exercise(ctx, &mut created).await;
        cleanup::delete_created(&ctx.client, created.as_deref()).await;
        outcome
    }
}

/// TC010: a manual run reports its status and per-step results.
pub struct ExecuteWorkflow;

impl ExecuteWorkflow {
    async fn exercise(&self, ctx: &CaseContext, created: &mut Option<String>) -> HarnessResult<()> {
        let workflow = create_workflow(
            ctx,
            &fixtures::executable_workflow(),
            &[StatusCode::OK],
            created,
        )
        .await?;
        let id = non_empty_str(&workflow, "id")?;

        let resp = ctx.client.execute_workflow(id).await?;
        resp.expect_status(StatusCode::OK)?;
        let body = resp.object()?;
        expect_success(&body)?;
        let execution = object_field(&body, "execution")?;
        require_key(execution, "status", "Execution")?;
        require_key(execution, "step_results", "Execution")?;

        debug!(workflow_id = %id, status = %execution["status"], "Workflow executed");
        Ok(())
    }
}

#[async_trait]
impl ApiCase for ExecuteWorkflow {
    fn id(&self) -> &'static str {
        "TC010"
    }

    fn title(&self) -> &'static str {
        "POST /api/workflows/{id}/execute runs a workflow"
    }

    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()> {
        let mut created = None;
        let outcome = self.exercise(ctx, &mut created).await;
        cleanup::delete_created(&ctx.client, created.as_deref()).await;
        outcome
    }
}
