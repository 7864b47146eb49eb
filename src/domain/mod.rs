//! # Domain Layer
//!
//! Types for the resources behind the backend's HTTP contract.
//! The harness never stores these; it builds them as request payloads
//! and reads them back out of responses.

pub mod entities;

pub use entities::*;
