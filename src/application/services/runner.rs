//! Case Runner
//!
//! Runs cases one after another against a shared context and collects a
//! report per case. A failing case never stops the run.

use std::time::{Duration, Instant};

use tracing::{error, info, warn};

use crate::application::cases::{ApiCase, CaseContext};

/// Outcome of one case
#[derive(Debug, Clone)]
pub struct CaseReport {
    pub id: &'static str,
    pub title: &'static str,
    /// `Err` holds the failure message
    pub outcome: Result<(), String>,
    pub elapsed: Duration,
}

impl CaseReport {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Reports of a whole run, in execution order
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub reports: Vec<CaseReport>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.reports.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn report(&self, id: &str) -> Option<&CaseReport> {
        self.reports.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }
}

/// Keep the cases named in `only` (case-insensitive); empty keeps all.
pub fn select_cases(cases: Vec<Box<dyn ApiCase>>, only: &[String]) -> Vec<Box<dyn ApiCase>> {
    if only.is_empty() {
        return cases;
    }

    for wanted in only {
        if !cases.iter().any(|c| c.id().eq_ignore_ascii_case(wanted.trim())) {
            warn!(case = %wanted, "Unknown case id ignored");
        }
    }

    cases
        .into_iter()
        .filter(|c| only.iter().any(|w| c.id().eq_ignore_ascii_case(w.trim())))
        .collect()
}

/// Run `cases` sequentially
pub async fn run_cases(ctx: &CaseContext, cases: &[Box<dyn ApiCase>]) -> RunSummary {
    let mut summary = RunSummary::default();

    for case in cases {
        info!(case = case.id(), title = case.title(), "Running case");
        let started = Instant::now();
        let outcome = case.run(ctx).await.map_err(|e| e.to_string());
        let elapsed = started.elapsed();

        match &outcome {
            Ok(()) => info!(case = case.id(), elapsed_ms = elapsed.as_millis() as u64, "Case passed"),
            Err(message) => error!(case = case.id(), error = %message, "Case failed"),
        }

        summary.reports.push(CaseReport {
            id: case.id(),
            title: case.title(),
            outcome,
            elapsed,
        });
    }

    summary
}
