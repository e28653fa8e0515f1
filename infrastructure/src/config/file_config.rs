//! Configuration file schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration, merged from defaults and TOML files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub generator: GeneratorConfig,
    pub storage: StorageConfig,
}

/// `[generator]` section: how to reach the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Base URL; endpoint paths are appended to its path component.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retry cap for transient failures (total attempts = retries + 1).
    pub retries: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 20,
            retries: 1,
        }
    }
}

/// `[storage]` section: where the category list lives.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Override for the categories file; platform data dir when unset.
    pub path: Option<PathBuf>,
}
