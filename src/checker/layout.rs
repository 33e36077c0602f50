use tracing::debug;

use super::{Check, CheckContext, CheckResult, Finding, require_file, walk_finding};
use crate::corpus::naming::HEADER_STEM;
use crate::corpus::{Section, Tier};
use crate::error::Result;
use crate::scanner::WalkScope;

/// The corpus root must be a directory.
#[derive(Debug, Default)]
pub struct RootExists;

impl Check for RootExists {
    fn name(&self) -> &'static str {
        "RootExists"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let findings = if ctx.root.is_dir() {
            Vec::new()
        } else {
            vec![Finding::error(format!(
                "corpus root not found: {}",
                ctx.root.display()
            ))]
        };

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            format!("corpus root {}", ctx.root.display()),
            |_| "corpus root is not a directory".to_string(),
        ))
    }
}

/// `00-header.{complete,summary,abstract}.md` directly under the root.
#[derive(Debug, Default)]
pub struct HeaderFilesExist;

impl Check for HeaderFilesExist {
    fn name(&self) -> &'static str {
        "HeaderFilesExist"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let findings: Vec<Finding> = Tier::ALL
            .into_iter()
            .filter_map(|tier| require_file(ctx, &ctx.root.join(tier.file_name(HEADER_STEM))))
            .collect();

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            "all header tiers present",
            |n| format!("{n} header files missing"),
        ))
    }
}

/// Every top-level `NN-` directory carries the three `00-section` tiers.
#[derive(Debug, Default)]
pub struct SectionStructure;

impl Check for SectionStructure {
    fn name(&self) -> &'static str {
        "SectionStructure"
    }

    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let mut findings = Vec::new();
        let mut sections = 0usize;

        for item in ctx.walker(WalkScope::All).max_depth(1).entries() {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    findings.push(walk_finding(&err));
                    continue;
                }
            };
            if !entry.is_dir() {
                continue;
            }
            let Some(section) = Section::parse(&entry.path) else {
                continue;
            };

            sections += 1;
            debug!(section = %section.name, number = %section.number, "checking section");
            findings.extend(
                Tier::ALL
                    .into_iter()
                    .filter_map(|tier| require_file(ctx, &section.section_file(tier))),
            );
        }

        Ok(CheckResult::conclude(
            self.name(),
            findings,
            format!("{sections} sections complete"),
            |n| format!("{n} section problems"),
        ))
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
