//! Endpoint catalog for the generation service.

use reqwest::Method;

/// The generation service's operations, each bound to a fixed path suffix
/// and HTTP verb. The catalog is closed on purpose; [`Endpoint::Custom`] is
/// the escape hatch for capabilities outside the four canonical calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Single free-response generation.
    QaGenerate,
    /// Batch free-response generation.
    QaBatch,
    /// Single 4-choice generation.
    McqGenerate,
    /// Batch 4-choice generation.
    McqBatch,
    /// Arbitrary path and verb.
    Custom { path: String, method: Method },
}

impl Endpoint {
    /// Path suffix, appended to the base URL's existing path.
    pub fn path(&self) -> &str {
        match self {
            Self::QaGenerate => "/generator/generate_problem/",
            Self::QaBatch => "/generator/generate_workbook_for_q_and_a/",
            Self::McqGenerate => "/generator/generate_question_4choice_api/",
            Self::McqBatch => "/generator/generate_4_choice_workbook_for_q_and_a/",
            Self::Custom { path, .. } => path,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Self::QaGenerate | Self::QaBatch | Self::McqGenerate | Self::McqBatch => Method::POST,
            Self::Custom { method, .. } => method.clone(),
        }
    }
}
