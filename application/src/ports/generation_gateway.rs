//! Generation gateway port
//!
//! Defines the interface for the question-generation service: four typed
//! operations (single/batch crossed with free-response/4-choice) and the
//! error taxonomy they surface. The HTTP adapter lives in the
//! infrastructure layer.

use async_trait::async_trait;
use quizforge_domain::ProblemPattern;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the generation service.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    #[error("failed to encode request body: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("transport failure: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("server error: HTTP {status}")]
    Server { status: u16, body: Vec<u8> },

    #[error("failed to decode response: {0}")]
    Decoding(#[source] serde_json::Error),

    /// A batch response whose length does not match the request. The
    /// positional answer-to-item correspondence would be meaningless, so
    /// the call fails closed instead of zipping short.
    #[error("malformed batch response: expected {expected} items, got {actual}")]
    MalformedResponse { expected: usize, actual: usize },

    #[error("request cancelled")]
    Cancelled,
}

impl GenerationError {
    /// Check if this error represents a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerationError::Cancelled)
    }
}

/// One generated free-response item.
///
/// Field names on the wire are the service's Japanese vocabulary; they are
/// contractual and must not be renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaItem {
    #[serde(rename = "問題文")]
    pub question: String,
    #[serde(rename = "解説")]
    pub explanation: String,
}

/// One generated 4-choice item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqItem {
    #[serde(rename = "問題文")]
    pub question: String,
    #[serde(rename = "選択肢")]
    pub choices: Vec<String>,
    #[serde(rename = "解説")]
    pub explanation: String,
}

/// Gateway to the question-generation service.
///
/// `existing_questions` carries prompts already generated for the same
/// answer so the service avoids duplicates; its order is preserved on the
/// wire. Batch responses correspond positionally to the request answers.
#[async_trait]
pub trait GenerationGateway: Send + Sync {
    /// Generate one free-response question for an answer.
    async fn generate_single_qa(
        &self,
        answer: &str,
        existing_questions: &[String],
        pattern: ProblemPattern,
    ) -> Result<QaItem, GenerationError>;

    /// Generate one free-response question per answer, in request order.
    async fn generate_batch_qa(
        &self,
        answers: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<QaItem>, GenerationError>;

    /// Generate one 4-choice question for an answer. The service returns an
    /// array even for a single item; an empty array means "no result".
    async fn generate_single_mcq(
        &self,
        answer: &str,
        existing_questions: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<McqItem>, GenerationError>;

    /// Generate one 4-choice question per answer, in request order.
    async fn generate_batch_mcq(
        &self,
        answers: &[String],
        pattern: ProblemPattern,
    ) -> Result<Vec<McqItem>, GenerationError>;
}
