use std::fmt::Write;
use std::path::Path;

use crate::checker::{CheckResult, CheckStatus};
use crate::error::Result;
use crate::report::ValidationReport;

use super::OutputFormatter;

/// Findings shown per check unless `-vv` is given.
pub const FINDINGS_SHOWN: usize = 10;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stderr is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
    quiet: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
            quiet: false,
        }
    }

    /// Only failing checks and the failure summary are shown.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stderr())
            }
        }
    }

    const fn status_icon(status: CheckStatus) -> &'static str {
        match status {
            CheckStatus::Pass => "✓",
            CheckStatus::Warn => "⚠",
            CheckStatus::Fail => "✗",
        }
    }

    fn colorize(&self, text: &str, status: CheckStatus) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = match status {
            CheckStatus::Pass => ansi::GREEN,
            CheckStatus::Warn => ansi::YELLOW,
            CheckStatus::Fail => ansi::RED,
        };

        format!("{color}{text}{}", ansi::RESET)
    }

    /// `None` in quiet mode.
    #[must_use]
    pub fn format_header(&self, root: &Path) -> Option<String> {
        (!self.quiet).then(|| format!("Validating BCS corpus: {}", root.display()))
    }

    /// Progress line for one finished check, with its findings indented below.
    ///
    /// `None` when quiet mode hides the check.
    #[must_use]
    pub fn format_check(&self, result: &CheckResult) -> Option<String> {
        if self.quiet && !result.is_failed() {
            return None;
        }

        let icon = self.colorize(Self::status_icon(result.status), result.status);
        let mut output = format!("{icon} {}: {}", result.check, result.summary);

        let shown = if self.verbose >= 2 {
            result.findings.len()
        } else {
            FINDINGS_SHOWN
        };
        for finding in result.findings.iter().take(shown) {
            let _ = write!(output, "\n    {}", finding.message);
        }
        if result.findings.len() > shown {
            let _ = write!(output, "\n    ... and {} more", result.findings.len() - shown);
        }
        Some(output)
    }

    fn format_summary(&self, report: &ValidationReport) -> String {
        let (status, verdict) = if report.passed() {
            (CheckStatus::Pass, "Validation passed")
        } else {
            (CheckStatus::Fail, "Validation failed")
        };
        if self.quiet && report.passed() {
            return String::new();
        }

        let line = format!(
            "{} {verdict}: {} errors, {} warnings ({} checks)",
            Self::status_icon(status),
            report.errors,
            report.warnings,
            report.checks_run
        );
        self.colorize(&line, status)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        Ok(self.format_summary(report))
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
