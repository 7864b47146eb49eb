//! Application Layer
//!
//! Contains the contract cases, the services that run them, and the
//! request/response DTOs they exchange with the backend.

pub mod cases;
pub mod dto;
pub mod services;
