use std::fmt::Write;

use serde::Serialize;

/// Whether a finding breaks the corpus or only degrades it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Counts toward the error total and fails the run.
    Error,
    /// Counts toward the warning total only.
    Warning,
}

/// A single problem found by a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

impl CheckStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Warn => "warn",
            Self::Fail => "fail",
        }
    }
}

/// Outcome of one check.
///
/// The status is derived from the findings: any error fails the check,
/// otherwise any warning makes it a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub check: &'static str,
    pub status: CheckStatus,
    /// One-line summary, e.g. `2 missing tier files`.
    pub summary: String,
    pub findings: Vec<Finding>,
    /// Maximum number of findings quoted in the report message.
    pub example_cap: Option<usize>,
    errors: usize,
    warnings: usize,
}

impl CheckResult {
    /// Build a result from the findings of a completed check.
    ///
    /// `passed` is the summary used when nothing was found; `failed` renders
    /// the summary from the number of findings otherwise.
    #[must_use]
    pub fn conclude(
        check: &'static str,
        findings: Vec<Finding>,
        passed: impl Into<String>,
        failed: impl FnOnce(usize) -> String,
    ) -> Self {
        let errors = findings.iter().filter(|f| f.is_error()).count();
        let warnings = findings.len() - errors;
        let status = if errors > 0 {
            CheckStatus::Fail
        } else if warnings > 0 {
            CheckStatus::Warn
        } else {
            CheckStatus::Pass
        };
        let summary = if findings.is_empty() {
            passed.into()
        } else {
            failed(findings.len())
        };

        Self {
            check,
            status,
            summary,
            findings,
            example_cap: None,
            errors,
            warnings,
        }
    }

    /// Quote at most `cap` findings in the report message.
    #[must_use]
    pub const fn with_example_cap(mut self, cap: usize) -> Self {
        self.example_cap = Some(cap);
        self
    }

    /// A check that returned an error or panicked. Counts as one error.
    #[must_use]
    pub fn crashed(check: &'static str, cause: &str) -> Self {
        Self {
            check,
            status: CheckStatus::Fail,
            summary: format!("{check} crashed: {cause}"),
            findings: Vec::new(),
            example_cap: None,
            errors: 1,
            warnings: 0,
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
    pub fn is_failed(&self) -> bool {
        self.status == CheckStatus::Fail
    }

    /// Summary followed by the quoted findings, as a single line.
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = self.summary.clone();
        if self.findings.is_empty() {
            return message;
        }

        let shown = self.example_cap.unwrap_or(self.findings.len());
        let quoted: Vec<&str> = self
            .findings
            .iter()
            .take(shown)
            .map(|f| f.message.as_str())
            .collect();
        let _ = write!(message, ": {}", quoted.join("; "));
        if self.findings.len() > shown {
            let _ = write!(message, "; ... and {} more", self.findings.len() - shown);
        }
        message
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
