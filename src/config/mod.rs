//! # Configuration Module
//!
//! This module handles harness configuration loading and management.
//! Configuration can be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.toml, config/{environment}.toml)
//! - .env files (via dotenvy)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use workflow_api_harness::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Checking backend at {}", settings.api.base_url);
//! ```

mod settings;

pub use settings::*;
