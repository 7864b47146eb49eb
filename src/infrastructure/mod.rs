//! Infrastructure Layer
//!
//! Contains implementations for external concerns:
//! - HTTP client for the backend under test
//! - Token file persistence

pub mod http;
pub mod token_store;
