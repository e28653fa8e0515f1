//! JSON file category store.
//!
//! The whole category list is stored as one JSON document. Loading is
//! infallible from the caller's point of view: a missing, unreadable, or
//! undecodable file falls back to the built-in sample library. Saving is
//! best-effort and only logs on failure.

use crate::storage::sample::sample_categories;
use quizforge_application::CategoryRepository;
use quizforge_domain::Category;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct JsonCategoryStore {
    path: PathBuf,
}

impl JsonCategoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the platform data directory
    /// (e.g. `~/.local/share/quizforge/categories.json`).
    pub fn at_default_location() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join("quizforge").join("categories.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CategoryRepository for JsonCategoryStore {
    fn load(&self) -> Vec<Category> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored categories, seeding sample data");
                return sample_categories();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read stored categories, seeding sample data");
                return sample_categories();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(categories) => categories,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "stored categories undecodable, seeding sample data");
                sample_categories()
            }
        }
    }

    fn save(&self, categories: &[Category]) {
        if let Some(parent) = self.path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!(path = %parent.display(), error = %e, "could not create storage directory");
            return;
        }

        let encoded = match serde_json::to_vec(categories) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "could not encode categories");
                return;
            }
        };

        if let Err(e) = fs::write(&self.path, encoded) {
            warn!(path = %self.path.display(), error = %e, "could not write categories");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_domain::{Question, QuestionType, SubQuestion};

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCategoryStore::new(dir.path().join("categories.json"));

        let categories = vec![Category::new(
            "世界史",
            "globe",
            vec![Question::new(
                vec![SubQuestion::new("1789年に始まったフランスの革命は？", "人権宣言。")],
                "フランス革命",
                "世界史",
            )],
            QuestionType::FreeText,
        )];
        store.save(&categories);

        let loaded = store.load();
        assert_eq!(loaded, categories);
    }

    #[test]
    fn test_missing_file_yields_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonCategoryStore::new(dir.path().join("absent.json"));
        let loaded = store.load();
        assert!(!loaded.is_empty());
    }

    #[test]
    fn test_corrupt_file_yields_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("categories.json");
        fs::write(&path, b"{ not json").unwrap();

        let store = JsonCategoryStore::new(path);
        let loaded = store.load();
        let sample = sample_categories();
        // ids are freshly minted per call, so compare shape not identity
        assert_eq!(loaded.len(), sample.len());
        assert!(loaded.iter().zip(&sample).all(|(a, b)| a.name == b.name));
    }
}
