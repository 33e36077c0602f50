use serde::{Deserialize, Serialize};

use crate::error::{BcsError, Result};
use crate::registry::RegistrySource;

pub const DEFAULT_SUMMARY_LIMIT: u64 = 10_000;
pub const DEFAULT_ABSTRACT_LIMIT: u64 = 1_500;
pub const DEFAULT_REGISTRY_TIMEOUT_SECS: u64 = crate::registry::DEFAULT_TIMEOUT.as_secs();

/// Size budgets for derived tiers, in bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    #[serde(rename = "summary", default = "default_summary_limit")]
    pub summary_limit: u64,

    #[serde(rename = "abstract", default = "default_abstract_limit")]
    pub abstract_limit: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            summary_limit: DEFAULT_SUMMARY_LIMIT,
            abstract_limit: DEFAULT_ABSTRACT_LIMIT,
        }
    }
}

/// Walk configuration shared by every check.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Extra glob patterns, relative to the corpus root, skipped by every walk.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Where BCS codes come from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub source: RegistrySource,

    /// Program run for `codes` and `decode` (command source only).
    #[serde(default = "default_registry_command")]
    pub command: String,

    /// Arguments placed before the subcommand.
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default = "default_registry_timeout")]
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            source: RegistrySource::default(),
            command: default_registry_command(),
            args: Vec::new(),
            timeout_secs: DEFAULT_REGISTRY_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub registry: RegistryConfig,
}

impl Config {
    /// Reject values no run can work with.
    ///
    /// # Errors
    /// Returns a `Config` error naming the offending key.
    pub fn validate(&self) -> Result<()> {
        if self.limits.summary_limit == 0 {
            return Err(BcsError::Config(
                "limits.summary must be greater than 0".to_string(),
            ));
        }
        if self.limits.abstract_limit == 0 {
            return Err(BcsError::Config(
                "limits.abstract must be greater than 0".to_string(),
            ));
        }
        if self.registry.timeout_secs == 0 {
            return Err(BcsError::Config(
                "registry.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.registry.source == RegistrySource::Command && self.registry.command.trim().is_empty()
        {
            return Err(BcsError::Config(
                "registry.command must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

const fn default_summary_limit() -> u64 {
    DEFAULT_SUMMARY_LIMIT
}

const fn default_abstract_limit() -> u64 {
    DEFAULT_ABSTRACT_LIMIT
}

const fn default_registry_timeout() -> u64 {
    DEFAULT_REGISTRY_TIMEOUT_SECS
}

fn default_registry_command() -> String {
    crate::registry::DEFAULT_PROGRAM.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
