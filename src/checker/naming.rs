use super::{Check, CheckContext, CheckResult, Finding, walk_finding};
use crate::corpus::naming;
use crate::error::Result;
use crate::scanner::{CorpusEntry, WalkScope};

/// Messages quote at most this many naming violations.
pub const NAMING_EXAMPLE_CAP: usize = 10;

/// Collect an error for every entry whose own name matches `offends`.
///
/// Ancestors are entries too, so this covers every path component.
fn scan_entries(
    ctx: &CheckContext<'_>,
    scope: WalkScope,
    files_only: bool,
    mut offends: impl FnMut(&CorpusEntry) -> Option<String>,
) -> (Vec<Finding>, usize) {
    let walker = ctx.walker(scope);
    let walk = if files_only {
        walker.files()
    } else {
        walker.entries()
    };

    let mut findings = Vec::new();
    let mut seen = 0usize;
    for item in walk {
        match item {
            Ok(entry) => {
                seen += 1;
                if let Some(message) = offends(&entry) {
                    findings.push(Finding::error(message));
                }
            }
            Err(err) => findings.push(walk_finding(&err)),
        }
    }
    (findings, seen)
}

/// Numeric prefixes must be two digits: `2-foo` is rejected.
#[derive(Debug, Default)]
pub struct ZeroPaddedPrefixes;

impl Check for ZeroPaddedPrefixes {
    fn name(&self) -> &'static str {
        "ZeroPaddedPrefixes"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let (findings, seen) = scan_entries(ctx, WalkScope::All, false, |entry| {
            naming::has_single_digit_prefix(&entry.file_name())
                .then(|| format!("single-digit prefix: {}", entry.relative.display()))
        });

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            format!("{seen} entries zero-padded"),
            |n| format!("{n} unpadded prefixes"),
        ))
    }
}

/// Rule files are named `NN-lowercase-name.<tier>.md`.
#[derive(Debug, Default)]
pub struct NamingConvention;

impl Check for NamingConvention {
    fn name(&self) -> &'static str {
        "NamingConvention"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let mut checked = 0usize;
        let (findings, _) = scan_entries(ctx, WalkScope::Authored, true, |entry| {
            let name = entry.file_name();
            if !name.ends_with(".md") || naming::is_fixed_name(&name) {
                return None;
            }
            checked += 1;
            (!naming::is_rule_file_name(&name))
                .then(|| format!("bad name: {}", entry.relative.display()))
        });

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            format!("{checked} rule files named correctly"),
            |n| {
                format!(
                    "{n} files do not match {}",
                    naming::rule_file_pattern()
                )
            },
        )
        .with_example_cap(NAMING_EXAMPLE_CAP))
    }
}

/// Prefixes take no letter suffix: `02a-foo` is rejected.
#[derive(Debug, Default)]
pub struct NoAlphabeticSuffix;

impl Check for NoAlphabeticSuffix {
    fn name(&self) -> &'static str {
        "NoAlphabeticSuffix"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let (findings, seen) = scan_entries(ctx, WalkScope::All, false, |entry| {
            naming::has_alphabetic_suffix(&entry.file_name())
                .then(|| format!("alphabetic suffix: {}", entry.relative.display()))
        });

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            format!("{seen} entries without alphabetic suffixes"),
            |n| format!("{n} alphabetic suffixes"),
        ))
    }
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
