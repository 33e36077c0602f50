use std::path::{Path, PathBuf};

use super::{CodeRegistry, StaticRegistry};
use crate::corpus::{Corpus, Tier};
use crate::error::{BcsError, Result};
use crate::scanner::{CorpusWalker, FileFilter, WalkScope};

/// Registry that derives codes from rule positions in the tree.
///
/// Rules sharing a numeric prefix in the same directory produce the same
/// code, which is exactly what the uniqueness check is meant to catch.
#[derive(Debug, Clone)]
pub struct TreeRegistry {
    inner: std::result::Result<StaticRegistry, String>,
}

impl TreeRegistry {
    /// Build the registry from the authored part of the corpus.
    ///
    /// A missing root leaves the registry unavailable.
    #[must_use]
    pub fn scan(root: &Path, filter: &dyn FileFilter) -> Self {
        if !root.is_dir() {
            return Self {
                inner: Err(format!("corpus root not found: {}", root.display())),
            };
        }

        let walker = CorpusWalker::new(root, filter).scope(WalkScope::Authored);
        let corpus = Corpus::discover(&walker);
        let entries = corpus.authored_rules().filter_map(|rule| {
            rule.code()
                .map(|code| (code.to_string(), rule.tier_path(Tier::Complete)))
        });

        Self {
            inner: Ok(StaticRegistry::new(entries)),
        }
    }

    fn registry(&self) -> Result<&StaticRegistry> {
        self.inner
            .as_ref()
            .map_err(|reason| BcsError::RegistryUnavailable(reason.clone()))
    }
}

impl CodeRegistry for TreeRegistry {
    fn decode(&self, code: &str) -> Result<PathBuf> {
        self.registry()?.decode(code)
    }

    fn list_codes(&self) -> Result<Vec<String>> {
        self.registry()?.list_codes()
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
