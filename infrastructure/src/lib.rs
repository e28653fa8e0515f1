//! Infrastructure layer for quizforge
//!
//! This crate contains the adapters that implement the ports defined in the
//! application layer: the HTTP client for the question-generation service,
//! the JSON file category store, and the configuration file loader.

pub mod config;
pub mod generator;
pub mod storage;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, GeneratorConfig, StorageConfig};
pub use generator::{Endpoint, GeneratorClient, SingleRequestSpec};
pub use storage::JsonCategoryStore;
