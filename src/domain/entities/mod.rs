//! # Domain Entities
//!
//! Resources the backend owns and the harness exercises.
//!
//! - **User**: account returned by register, login and the current-user lookup
//! - **Workflow**: trigger plus ordered steps, created and executed by the cases

mod user;
mod workflow;

pub use user::{User, SECRET_USER_FIELDS};
pub use workflow::{Step, StepKind, StepSettings, Trigger};
