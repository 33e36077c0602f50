//! Sources of BCS codes.
//!
//! The validator only needs two things from a registry: the list of every
//! code it knows about, and where a code lives on disk.

mod command;
mod tree;

pub use command::{CommandRegistry, DEFAULT_PROGRAM, DEFAULT_TIMEOUT};
pub use tree::TreeRegistry;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{BcsError, Result};

pub trait CodeRegistry {
    /// Resolve a code to its canonical tier file.
    ///
    /// # Errors
    /// `CodeNotFound` for an unknown code, `RegistryUnavailable` if the
    /// registry cannot be reached.
    fn decode(&self, code: &str) -> Result<PathBuf>;

    /// Every registered code, in the registry's own order.
    ///
    /// # Errors
    /// `RegistryUnavailable` if the registry cannot be reached.
    fn list_codes(&self) -> Result<Vec<String>>;
}

/// Which registry implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RegistrySource {
    /// Run the external `bcs` program
    #[default]
    Command,
    /// Derive codes from the directory layout
    Tree,
    /// Skip code checks
    #[serde(rename = "none")]
    #[value(name = "none")]
    Disabled,
}

/// A registry that is never available.
#[derive(Debug, Clone, Default)]
pub struct DisabledRegistry;

impl CodeRegistry for DisabledRegistry {
    fn decode(&self, _code: &str) -> Result<PathBuf> {
        Err(BcsError::RegistryUnavailable("registry disabled".to_string()))
    }

    fn list_codes(&self) -> Result<Vec<String>> {
        Err(BcsError::RegistryUnavailable("registry disabled".to_string()))
    }
}

/// Fixed codes and paths, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: Vec<(String, PathBuf)>,
}

impl StaticRegistry {
    #[must_use]
    pub fn new<C, P>(entries: impl IntoIterator<Item = (C, P)>) -> Self
    where
        C: Into<String>,
        P: Into<PathBuf>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, path)| (code.into(), path.into()))
                .collect(),
        }
    }
}

impl CodeRegistry for StaticRegistry {
    fn decode(&self, code: &str) -> Result<PathBuf> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, path)| path.clone())
            .ok_or_else(|| BcsError::CodeNotFound(code.to_string()))
    }

    fn list_codes(&self) -> Result<Vec<String>> {
        Ok(self.entries.iter().map(|(code, _)| code.clone()).collect())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
