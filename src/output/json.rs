use serde::Serialize;

use crate::checker::CheckStatus;
use crate::error::Result;
use crate::report::{OverallStatus, ValidationReport};

use super::OutputFormatter;

/// Compact single-line JSON; field order is part of the format.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    status: OverallStatus,
    summary: Summary,
    checks: Vec<JsonCheck<'a>>,
}

#[derive(Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    checks_run: usize,
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    check: &'a str,
    status: CheckStatus,
    message: String,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let output = JsonOutput {
            status: report.status,
            summary: Summary {
                errors: report.errors,
                warnings: report.warnings,
                checks_run: report.checks_run,
            },
            checks: report
                .results
                .iter()
                .map(|r| JsonCheck {
                    check: r.check,
                    status: r.status,
                    message: r.message(),
                })
                .collect(),
        };

        Ok(serde_json::to_string(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
