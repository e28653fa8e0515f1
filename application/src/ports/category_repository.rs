//! Category repository port
//!
//! Best-effort local persistence of the category list. Loading never fails
//! from the caller's point of view (implementations fall back to a seed
//! dataset) and saving is fire-and-forget.

use quizforge_domain::Category;

/// Local storage for quiz categories.
pub trait CategoryRepository: Send + Sync {
    /// Load all categories. Implementations return a fallback dataset when
    /// nothing usable is stored.
    fn load(&self) -> Vec<Category>;

    /// Persist the category list. Failures are logged by the
    /// implementation, never surfaced.
    fn save(&self, categories: &[Category]);
}
