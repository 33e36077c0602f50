mod json;
mod progress;
mod text;

pub use json::JsonFormatter;
pub use progress::CheckProgress;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::report::ValidationReport;

/// Trait for rendering a finished report.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &ValidationReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Progress and summary on stderr
    #[default]
    Text,
    /// A single JSON object on stdout
    Json,
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
