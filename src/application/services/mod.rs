//! Application Services
//!
//! Flows that coordinate the HTTP client, the token file and the cases.
//!
//! ## Available Services
//!
//! - **TokenProvisioner**: login-or-register flow for the test account
//! - **resolve_token**: picks the bearer token the cases run with
//! - **run_cases**: sequential case runner and its report types

pub mod runner;
pub mod session;
pub mod token_service;

pub use runner::{run_cases, select_cases, CaseReport, RunSummary};
pub use session::{resolve_token, ResolvedToken, TokenSource};
pub use token_service::{Provisioned, TokenProvisioner};
