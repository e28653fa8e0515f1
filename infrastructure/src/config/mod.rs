//! Configuration file loading.

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, GeneratorConfig, StorageConfig};
pub use loader::ConfigLoader;
