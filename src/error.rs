use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BcsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Corpus root cannot be inspected: {path}")]
    RootInaccessible {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Unknown BCS code: {0}")]
    CodeNotFound(String),

    #[error("Code registry unavailable: {0}")]
    RegistryUnavailable(String),
}

impl BcsError {
    /// Short variant name, for diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::RootInaccessible { .. } => "RootInaccessible",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::CodeNotFound(_) => "CodeNotFound",
            Self::RegistryUnavailable(_) => "RegistryUnavailable",
        }
    }
}

pub type Result<T> = std::result::Result<T, BcsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
