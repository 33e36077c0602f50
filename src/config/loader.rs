use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BcsError, Result};

use super::Config;
use super::store::{ConfigStore, DiskConfigStore};

/// A loaded configuration and the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// `None` when no file was found and defaults are in effect.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a discovered config file cannot be read or parsed.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing, cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".bcs-validate.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from a [`ConfigStore`].
///
/// Search order:
/// 1. `.bcs-validate.toml` in the working directory
/// 2. `config.toml` in the user config directory
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<S: ConfigStore = DiskConfigStore> {
    store: S,
}

impl Default for FileConfigLoader<DiskConfigStore> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<DiskConfigStore> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store: DiskConfigStore,
        }
    }
}

impl<S: ConfigStore> FileConfigLoader<S> {
    #[must_use]
    pub const fn with_store(store: S) -> Self {
        Self { store }
    }

    fn candidates(&self) -> [Option<PathBuf>; 2] {
        [
            self.store.working_dir().map(|dir| dir.join(LOCAL_CONFIG_NAME)),
            self.store
                .user_config_dir()
                .map(|dir| dir.join(USER_CONFIG_NAME)),
        ]
    }

    /// `None` when the file does not exist.
    fn read_config(&self, path: &Path) -> Result<Option<LoadResult>> {
        let content = self
            .store
            .read_file(path)
            .map_err(|source| BcsError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        let Some(content) = content else {
            return Ok(None);
        };

        let config: Config = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(Some(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        }))
    }
}

impl<S: ConfigStore> ConfigLoader for FileConfigLoader<S> {
    fn load(&self) -> Result<LoadResult> {
        for path in self.candidates().into_iter().flatten() {
            if let Some(loaded) = self.read_config(&path)? {
                return Ok(loaded);
            }
        }

        debug!("no configuration file found, using defaults");
        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        self.read_config(path)?.ok_or_else(|| {
            BcsError::Config(format!("config file not found: {}", path.display()))
        })
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
