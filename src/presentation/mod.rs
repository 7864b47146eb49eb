//! Presentation Layer
//!
//! Console output of both binaries.

pub mod report;
pub mod token_banner;
