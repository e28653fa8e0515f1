//! Problem pattern value object

use serde::{Deserialize, Serialize};

/// Problem style sent to the generation service as the `pattern` field.
///
/// The serialized literals are part of the service contract and must match
/// its vocabulary byte for byte. They are not display labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemPattern {
    /// One question, one answer (free response).
    #[serde(rename = "1問1答")]
    OneShot,
    /// Fill-in-the-blank.
    #[serde(rename = "穴埋め")]
    FillInBlank,
}

impl Default for ProblemPattern {
    fn default() -> Self {
        Self::OneShot
    }
}

impl ProblemPattern {
    /// The wire literal for this pattern.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneShot => "1問1答",
            Self::FillInBlank => "穴埋め",
        }
    }
}

impl std::fmt::Display for ProblemPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
