//! The nine corpus checks and the suite that runs them.

mod codes;
mod layout;
mod naming;
mod result;
mod suite;
mod tiers;

pub use codes::CodeUniqueness;
pub use layout::{HeaderFilesExist, RootExists, SectionStructure};
pub use naming::{NamingConvention, NoAlphabeticSuffix, ZeroPaddedPrefixes};
pub use result::{CheckResult, CheckStatus, Finding, Severity};
pub use suite::{CheckSuite, SuiteObserver};
pub use tiers::{SizeLimits, TierCompleteness};

use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::Result;
use crate::registry::CodeRegistry;
use crate::scanner::{CorpusWalker, FileFilter, WalkError, WalkScope};

/// Everything a check may consult. Checks never mutate it.
pub struct CheckContext<'a> {
    pub root: &'a Path,
    pub filter: &'a dyn FileFilter,
    pub registry: &'a dyn CodeRegistry,
    pub limits: LimitsConfig,
}

impl<'a> CheckContext<'a> {
    #[must_use]
    pub fn walker(&self, scope: WalkScope) -> CorpusWalker<'a> {
        CorpusWalker::new(self.root, self.filter).scope(scope)
    }

    /// Path shown in messages: relative to the root when possible.
    #[must_use]
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

pub trait Check {
    /// Name used in reports, e.g. `TierCompleteness`.
    fn name(&self) -> &'static str;

    /// Run the check once against the corpus.
    ///
    /// # Errors
    /// An error means the check itself broke; the suite reports it as a crash.
    fn run(&self, ctx: &CheckContext<'_>) -> Result<CheckResult>;
}

/// A missing root is a structural error; anything else met while walking is
/// a warning and the walk goes on.
#[must_use]
pub fn walk_finding(err: &WalkError) -> Finding {
    if err.is_root_missing() {
        Finding::error(err.to_string())
    } else {
        Finding::warning(err.to_string())
    }
}

/// `None` if `path` exists, an error if it does not, a warning if it cannot
/// be stat'd.
fn require_file(ctx: &CheckContext<'_>, path: &Path) -> Option<Finding> {
    match path.try_exists() {
        Ok(true) => None,
        Ok(false) => Some(Finding::error(format!(
            "missing {}",
            ctx.display_path(path)
        ))),
        Err(e) => Some(Finding::warning(format!(
            "cannot stat {}: {e}",
            ctx.display_path(path)
        ))),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::Path;

    use crate::config::LimitsConfig;
    use crate::registry::{CodeRegistry, DisabledRegistry};
    use crate::scanner::GlobFilter;

    use super::CheckContext;

    pub fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Write all three tiers of a rule with small content.
    pub fn write_rule(root: &Path, base: &str) {
        for suffix in ["complete", "summary", "abstract"] {
            write(root, &format!("{base}.{suffix}.md"), "# rule\n");
        }
    }

    pub fn filter() -> GlobFilter {
        GlobFilter::new(&[]).unwrap()
    }

    pub fn context<'a>(
        root: &'a Path,
        filter: &'a GlobFilter,
        registry: &'a dyn CodeRegistry,
    ) -> CheckContext<'a> {
        CheckContext {
            root,
            filter,
            registry,
            limits: LimitsConfig::default(),
        }
    }

    pub static DISABLED: DisabledRegistry = DisabledRegistry;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
