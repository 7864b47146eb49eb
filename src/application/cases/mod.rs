//! Endpoint Test Cases
//!
//! Each case is a self-contained contract check against one endpoint:
//! optional setup, the call under test, shape assertions, and a cleanup
//! that always runs and never fails the case.
//!
//! | Id | Endpoint |
//! |----|----------|
//! | TC001 | `POST /api/auth/register` |
//! | TC002 | `POST /api/auth/login` |
//! | TC003 | `GET /api/auth/me` |
//! | TC004 | `POST /api/chat` |
//! | TC005 | `GET /api/workflows` |
//! | TC006 | `POST /api/workflows` |
//! | TC007 | `GET /api/workflows/{id}` |
//! | TC008 | `PUT /api/workflows/{id}` |
//! | TC009 | `DELETE /api/workflows/{id}` |
//! | TC010 | `POST /api/workflows/{id}/execute` |

use async_trait::async_trait;

use crate::config::Settings;
use crate::infrastructure::http::ApiClient;
use crate::shared::error::HarnessResult;

pub mod auth;
pub mod chat;
pub mod cleanup;
pub mod fixtures;
pub mod workflows;

/// Everything a case needs to talk to the backend
#[derive(Debug, Clone)]
pub struct CaseContext {
    /// Client carrying the resolved bearer token
    pub client: ApiClient,
    pub settings: Settings,
}

impl CaseContext {
    pub fn new(client: ApiClient, settings: Settings) -> Self {
        Self { client, settings }
    }

    /// Client without an `Authorization` header
    pub fn anonymous(&self) -> ApiClient {
        self.client.anonymous()
    }
}

/// One end-to-end contract check
#[async_trait]
pub trait ApiCase: Send + Sync {
    /// Stable identifier such as `TC001`
    fn id(&self) -> &'static str;

    /// Human-readable description
    fn title(&self) -> &'static str;

    /// Run the case; the first violated expectation is returned as an error
    async fn run(&self, ctx: &CaseContext) -> HarnessResult<()>;
}

/// Every case, in id order
pub fn all_cases() -> Vec<Box<dyn ApiCase>> {
    vec![
        Box::new(auth::RegisterUser),
        Box::new(auth::LoginUser),
        Box::new(auth::CurrentUser),
        Box::new(chat::SendChatMessage),
        Box::new(workflows::ListWorkflows),
        Box::new(workflows::CreateWorkflow),
        Box::new(workflows::GetWorkflowById),
        Box::new(workflows::UpdateWorkflow),
        Box::new(workflows::DeleteWorkflow),
        Box::new(workflows::ExecuteWorkflow),
    ]
}
