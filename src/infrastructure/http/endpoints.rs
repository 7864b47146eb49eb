//! Route table of the backend under test.

pub const AUTH_REGISTER: &str = "/api/auth/register";
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_ME: &str = "/api/auth/me";
pub const CHAT: &str = "/api/chat";
pub const WORKFLOWS: &str = "/api/workflows";

/// `/api/workflows/{id}`
pub fn workflow(id: &str) -> String {
    format!("{}/{}", WORKFLOWS, id)
}

/// `/api/workflows/{id}/execute`
pub fn workflow_execute(id: &str) -> String {
    format!("{}/{}/execute", WORKFLOWS, id)
}
