//! Where configuration files live, behind a trait so discovery can be
//! exercised without touching the real home directory.

use std::io;
use std::path::{Path, PathBuf};

pub trait ConfigStore {
    /// Contents of the file at `path`, or `None` when there is no such file.
    ///
    /// # Errors
    /// Any read failure other than the file being absent.
    fn read_file(&self, path: &Path) -> io::Result<Option<String>>;

    /// Directory searched for the project-local config file.
    fn working_dir(&self) -> Option<PathBuf>;

    /// Per-user config directory (`~/.config/bcs-validate` on Linux).
    fn user_config_dir(&self) -> Option<PathBuf>;
}

/// Store backed by the process working directory and the platform
/// config directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskConfigStore;

impl ConfigStore for DiskConfigStore {
    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn working_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "bcs-validate")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
