//! HTTP access to the backend under test.

mod client;
pub mod endpoints;
mod response;

pub use client::ApiClient;
pub use response::ApiResponse;
