//! # Workflow API Harness Library
//!
//! End-to-end contract checks for a workflow-automation backend:
//! - Authentication (register, login, current user)
//! - AI chat
//! - Workflow CRUD and manual execution
//! - Bearer token provisioning for a fixed test account
//!
//! ## Architecture
//!
//! The crate follows the same layering as a service, seen from the client side:
//!
//! - **Domain Layer**: payload types for users and workflows
//! - **Application Layer**: the contract cases, the runner and the token flow
//! - **Infrastructure Layer**: HTTP client and token file
//! - **Presentation Layer**: console output of the binaries
//!
//! ## Module Structure
//!
//! ```text
//! workflow_api_harness/
//! +-- config/         Configuration management
//! +-- domain/         User and workflow payload types
//! +-- application/    Cases, services and DTOs
//! +-- infrastructure/ HTTP client and token file
//! +-- presentation/   Summary and token output
//! +-- shared/         Errors, JSON expectations, validation
//! ```

// Configuration module
pub mod config;

// Domain layer - Payload types
pub mod domain;

// Application layer - Cases and services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - Console output
pub mod presentation;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;
