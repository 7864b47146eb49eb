//! Best-effort teardown.
//!
//! Cleanup never fails a case: anything short of a clean delete is logged
//! at warn level and the created workflow is left behind on the backend.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn};

use crate::infrastructure::http::ApiClient;

/// Delete `id` if a case created one
pub async fn delete_created(client: &ApiClient, created: Option<&str>) {
    if let Some(id) = created {
        delete_quietly(client, id).await;
    }
}

/// Delete a workflow, swallowing every failure
pub async fn delete_quietly(client: &ApiClient, id: &str) {
    let resp = match client.delete_workflow(id).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!(workflow_id = %id, error = %e, "Cleanup delete failed");
            return;
        }
    };

    match resp.status {
        StatusCode::NO_CONTENT => debug!(workflow_id = %id, "Cleanup delete done"),
        StatusCode::OK if resp.is_empty() => debug!(workflow_id = %id, "Cleanup delete done"),
        StatusCode::OK => match resp.json() {
            Ok(body) if body.get("success") == Some(&Value::Bool(true)) => {
                debug!(workflow_id = %id, "Cleanup delete done")
            }
            Ok(_) => warn!(workflow_id = %id, body = %resp.snippet(), "Cleanup delete did not report success"),
            Err(e) => warn!(workflow_id = %id, error = %e, "Cleanup delete returned unreadable body"),
        },
        status => warn!(
            workflow_id = %id,
            status = status.as_u16(),
            body = %resp.snippet(),
            "Cleanup delete rejected"
        ),
    }
}
