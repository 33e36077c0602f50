use std::io::{IsTerminal, Write};

use indicatif::{ProgressBar, ProgressStyle};

use crate::checker::{CheckResult, SuiteObserver};

use super::TextFormatter;

/// Streams one progress line per finished check, with a spinner naming the
/// running check.
///
/// The spinner is disabled in quiet mode or when stderr is not a TTY.
pub struct CheckProgress<'a, W: Write> {
    progress_bar: ProgressBar,
    formatter: &'a TextFormatter,
    out: W,
}

impl<'a> CheckProgress<'a, std::io::Stderr> {
    #[must_use]
    pub fn new(formatter: &'a TextFormatter) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::with_writer(formatter, std::io::stderr(), is_tty)
    }
}

impl<'a, W: Write> CheckProgress<'a, W> {
    /// Explicit writer and visibility, so the visible path is testable
    /// without a terminal.
    pub fn with_writer(formatter: &'a TextFormatter, out: W, is_tty: bool) -> Self {
        let progress_bar = if formatter.is_quiet() || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_spinner()
        };

        Self {
            progress_bar,
            formatter,
            out,
        }
    }

    fn create_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{pos}/{len}] {msg}")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb
    }

    /// Clears the spinner from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }

    pub fn into_inner(self) -> W {
        self.progress_bar.finish_and_clear();
        self.out
    }
}

impl<W: Write> SuiteObserver for CheckProgress<'_, W> {
    fn check_started(&mut self, index: usize, total: usize, name: &'static str) {
        self.progress_bar.set_length(total as u64);
        self.progress_bar.set_position(index as u64 + 1);
        self.progress_bar.set_message(name);
        self.progress_bar.tick();
    }

    fn check_finished(&mut self, result: &CheckResult) {
        let Some(line) = self.formatter.format_check(result) else {
            return;
        };
        let out = &mut self.out;
        self.progress_bar.suspend(|| {
            let _ = writeln!(out, "{line}");
        });
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
