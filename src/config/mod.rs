mod loader;
mod model;
mod store;

pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME, LoadResult};
pub use model::{
    Config, DEFAULT_ABSTRACT_LIMIT, DEFAULT_REGISTRY_TIMEOUT_SECS, DEFAULT_SUMMARY_LIMIT,
    LimitsConfig, RegistryConfig, ScannerConfig,
};
pub use store::{ConfigStore, DiskConfigStore};
