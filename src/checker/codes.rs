use std::collections::HashSet;

use tracing::debug;

use super::{Check, CheckContext, CheckResult, Finding};
use crate::corpus::BcsCode;
use crate::error::{BcsError, Result};

/// Codes listed by the registry are pairwise unique.
///
/// An unavailable registry skips the check with a warning.
#[derive(Debug, Default)]
pub struct CodeUniqueness;

impl CodeUniqueness {
    fn describe_duplicate(ctx: &CheckContext<'_>, code: &str) -> String {
        match ctx.registry.decode(code) {
            Ok(path) => format!(
                "duplicate code {code} (first: {})",
                ctx.display_path(&path)
            ),
            Err(_) => format!("duplicate code {code}"),
        }
    }
}

impl Check for CodeUniqueness {
    fn name(&self) -> &'static str {
        "CodeUniqueness"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let codes = match ctx.registry.list_codes() {
            Ok(codes) => codes,
            Err(BcsError::RegistryUnavailable(reason)) => {
                debug!(%reason, "skipping code uniqueness");
                return Ok(CheckResult::conclude(
                    self.name(),
                    vec![Finding::warning(format!(
                        "registry unavailable, skipping uniqueness check ({reason})"
                    ))],
                    "",
                    |_| "skipped".to_string(),
                ));
            }
            Err(e) => return Err(e),
        };

        let mut findings = Vec::new();
        let mut seen: HashSet<&str> = HashSet::with_capacity(codes.len());
        for code in &codes {
            if BcsCode::parse(code).is_none() {
                findings.push(Finding::warning(format!("malformed code: {code}")));
            }
            if !seen.insert(code.as_str()) {
                findings.push(Finding::error(Self::describe_duplicate(ctx, code)));
            }
        }

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            format!("{} codes, all unique", codes.len()),
            |n| format!("{n} code problems"),
        ))
    }
}

#[cfg(test)]
#[path = "codes_tests.rs"]
mod tests;
