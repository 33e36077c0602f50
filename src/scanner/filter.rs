use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{BcsError, Result};

use super::WalkScope;

/// Paths that are not rule files and never follow the naming rules.
const NON_AUTHORED_PATTERNS: &[&str] = &["**/templates", "**/templates/**", "**/README.md"];

pub trait FileFilter {
    /// Decide whether an entry, given relative to the corpus root, is visited.
    fn should_include(&self, relative: &Path, scope: WalkScope) -> bool;
}

pub struct GlobFilter {
    exclude_patterns: GlobSet,
    non_authored: GlobSet,
}

impl GlobFilter {
    /// Create a new filter with extra exclude patterns on top of the built-in ones.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let exclude_patterns = build_glob_set(exclude_patterns.iter().map(String::as_str))?;
        let non_authored = build_glob_set(NON_AUTHORED_PATTERNS.iter().copied())?;

        Ok(Self {
            exclude_patterns,
            non_authored,
        })
    }

    fn is_excluded(&self, relative: &Path) -> bool {
        self.exclude_patterns.is_match(relative)
    }

    fn is_non_authored(&self, relative: &Path) -> bool {
        self.non_authored.is_match(relative)
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, relative: &Path, scope: WalkScope) -> bool {
        if self.is_excluded(relative) {
            return false;
        }
        match scope {
            WalkScope::All => true,
            WalkScope::Authored => !self.is_non_authored(relative),
        }
    }
}

fn build_glob_set<'a>(patterns: impl IntoIterator<Item = &'a str>) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|e| BcsError::InvalidPattern {
            pattern: pattern.to_string(),
            source: e,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| BcsError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
