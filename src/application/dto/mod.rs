//! Data Transfer Objects
//!
//! DTOs for API request/response serialization.

pub mod request;
pub mod response;

pub use request::{
    ChatRequest, CreateWorkflowRequest, LoginRequest, RegisterRequest, UpdateWorkflowRequest,
};
pub use response::{ApiEnvelope, AuthPayload};
