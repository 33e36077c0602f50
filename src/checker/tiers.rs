use tracing::debug;

use super::{Check, CheckContext, CheckResult, Finding, require_file, walk_finding};
use crate::corpus::naming::HEADER_STEM;
use crate::corpus::{Corpus, Tier, TierFile};
use crate::error::Result;
use crate::scanner::WalkScope;

/// Every `*.complete.md` (headers aside) has its summary and abstract siblings.
#[derive(Debug, Default)]
pub struct TierCompleteness;

impl Check for TierCompleteness {
    fn name(&self) -> &'static str {
        "TierCompleteness"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let corpus = Corpus::discover(&ctx.walker(WalkScope::All));
        let mut findings: Vec<Finding> = corpus.issues.iter().map(walk_finding).collect();
        let mut rules = 0usize;

        for rule in corpus.authored_rules() {
            rules += 1;
            for tier in [Tier::Summary, Tier::Abstract] {
                if rule.has(tier) {
                    continue;
                }
                findings.extend(require_file(ctx, &rule.tier_path(tier)));
            }
        }
        debug!(rules, findings = findings.len(), "tier completeness checked");

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            format!("{rules} rules have all three tiers"),
            |n| format!("{n} missing tier files"),
        ))
    }
}

/// Derived tiers stay within their byte budgets. Oversized files only warn.
#[derive(Debug, Default)]
pub struct SizeLimits;

impl SizeLimits {
    fn limit_for(ctx: &CheckContext<'_>, tier: Tier) -> Option<u64> {
        match tier {
            Tier::Complete => None,
            Tier::Summary => Some(ctx.limits.summary_limit),
            Tier::Abstract => Some(ctx.limits.abstract_limit),
        }
    }
}

impl Check for SizeLimits {
    fn name(&self) -> &'static str {
        "SizeLimits"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let mut findings = Vec::new();
        let mut checked = 0usize;

        for item in ctx.walker(WalkScope::All).files() {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    findings.push(walk_finding(&err));
                    continue;
                }
            };
            let file_name = entry.file_name();
            let Some((stem, tier)) = Tier::split(&file_name) else {
                continue;
            };
            let Some(limit) = Self::limit_for(ctx, tier) else {
                continue;
            };
            if entry.depth == 1 && stem == HEADER_STEM {
                continue;
            }

            let file = match TierFile::inspect(&entry.path, tier) {
                Ok(file) => file,
                Err(e) => {
                    findings.push(Finding::warning(format!(
                        "cannot read {}: {e}",
                        ctx.display_path(&entry.path)
                    )));
                    continue;
                }
            };
            if !file.exists {
                continue;
            }

            checked += 1;
            if file.size > limit {
                findings.push(Finding::warning(format!(
                    "{} is {} bytes, {} lines (limit {limit})",
                    ctx.display_path(&file.path),
                    file.size,
                    file.lines
                )));
            }
        }

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            format!("{checked} derived files within limits"),
            |n| {
                if n == 1 {
                    "1 size problem".to_string()
                } else {
                    format!("{n} size problems")
                }
            },
        ))
    }
}

#[cfg(test)]
#[path = "tiers_tests.rs"]
mod tests;
