//! # API Harness
//!
//! Runs the endpoint contract cases against the configured backend.
//!
//! This is the entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Bearer token resolution
//! - Sequential case execution and the final summary

use anyhow::{bail, Result};
use tracing::info;

use workflow_api_harness::application::cases::{all_cases, CaseContext};
use workflow_api_harness::application::services::{resolve_token, run_cases, select_cases};
use workflow_api_harness::config::Settings;
use workflow_api_harness::infrastructure::http::ApiClient;
use workflow_api_harness::presentation::report;

#[tokio::main]
async fn main() -> Result<()> {
    workflow_api_harness::telemetry::init_tracing();

    let settings = Settings::load()?;
    info!(
        base_url = %settings.api.base_url,
        timeout_secs = settings.api.timeout_secs,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let client = ApiClient::new(&settings.api)?;
    let resolved = resolve_token(&settings, &client).await?;
    info!(source = %resolved.source, "Bearer token resolved");

    let cases = select_cases(all_cases(), &settings.harness.only);
    if cases.is_empty() {
        bail!("No cases selected (harness.only = {:?})", settings.harness.only);
    }

    let ctx = CaseContext::new(client.with_token(resolved.token), settings);
    let summary = run_cases(&ctx, &cases).await;
    println!("{}", report::render_summary(&summary));

    if !summary.all_passed() {
        bail!("{} of {} cases failed", summary.failed(), summary.reports.len());
    }
    Ok(())
}
