//! Accumulation of check results into the final report.

use std::ops::ControlFlow;

use serde::Serialize;

use crate::checker::CheckResult;
use crate::{EXIT_SUCCESS, EXIT_VALIDATION_FAILED};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Pass,
    Fail,
}

/// Collects results in invocation order and keeps the running totals.
#[derive(Debug, Default)]
pub struct Aggregator {
    results: Vec<CheckResult>,
    errors: usize,
    warnings: usize,
    exit_on_first_error: bool,
}

impl Aggregator {
    #[must_use]
    pub fn new(exit_on_first_error: bool) -> Self {
        Self {
            exit_on_first_error,
            ..Self::default()
        }
    }

    /// Add a result. `Break` asks the caller to stop invoking checks.
    pub fn record(&mut self, result: CheckResult) -> ControlFlow<()> {
        self.errors += result.errors();
        self.warnings += result.warnings();
        let failed = result.is_failed();
        self.results.push(result);

        if self.exit_on_first_error && failed {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    #[must_use]
    pub const fn errors(&self) -> usize {
        self.errors
    }

    #[must_use]
    pub const fn warnings(&self) -> usize {
        self.warnings
    }

    #[must_use]
    pub fn finish(self) -> ValidationReport {
        let status = if self.errors == 0 {
            OverallStatus::Pass
        } else {
            OverallStatus::Fail
        };
        ValidationReport {
            status,
            errors: self.errors,
            warnings: self.warnings,
            checks_run: self.results.len(),
            results: self.results,
        }
    }
}

/// The aggregate of one validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub status: OverallStatus,
    pub errors: usize,
    pub warnings: usize,
    pub checks_run: usize,
    pub results: Vec<CheckResult>,
}

impl ValidationReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == OverallStatus::Pass
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.passed() {
            EXIT_SUCCESS
        } else {
            EXIT_VALIDATION_FAILED
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
