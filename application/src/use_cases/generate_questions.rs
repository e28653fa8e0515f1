//! Question generation use case.
//!
//! Turns a list of raw answers into domain [`Question`]s by calling the
//! generation gateway, and appends AI-generated phrasings to existing
//! questions. Holds the single-flight status a UI reads: a "generation in
//! progress" flag and the latest error message.

use crate::ports::generation_gateway::{GenerationError, GenerationGateway};
use quizforge_domain::{ProblemPattern, Question, QuestionType, SubQuestion};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Orchestrates question generation for the UI layer.
///
/// Methods take `&mut self`: the status flag and error message belong to
/// exactly one in-flight call, so overlapping generations on one
/// `QuestionGenerator` are rejected at compile time. Callers that need
/// concurrent generations hold one generator per flow.
pub struct QuestionGenerator {
    gateway: Arc<dyn GenerationGateway>,
    generating: bool,
    last_error: Option<String>,
}

impl QuestionGenerator {
    pub fn new(gateway: Arc<dyn GenerationGateway>) -> Self {
        Self {
            gateway,
            generating: false,
            last_error: None,
        }
    }

    /// Whether a generation call is currently in flight.
    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// The most recent failure message. Overwritten by each call, cleared
    /// on the next call's start.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Generate one question per answer for a new or existing category.
    ///
    /// Empty `answers` returns `[]` without touching the gateway or the
    /// status flag. On failure the error message is recorded and `[]` is
    /// returned; the batch is all-or-nothing.
    pub async fn generate_for_category(
        &mut self,
        category_name: &str,
        answers: &[String],
        multiple_choice: bool,
        fill_in_blank: bool,
    ) -> Vec<Question> {
        if answers.is_empty() {
            return Vec::new();
        }

        self.generating = true;
        self.last_error = None;

        info!(
            category = category_name,
            count = answers.len(),
            multiple_choice,
            "generating questions"
        );

        let result = self
            .run_batch(category_name, answers, multiple_choice, fill_in_blank)
            .await;
        self.generating = false;

        match result {
            Ok(questions) => questions,
            Err(e) => {
                warn!(category = category_name, error = %e, "generation failed");
                self.last_error = Some(e.to_string());
                Vec::new()
            }
        }
    }

    async fn run_batch(
        &self,
        category_name: &str,
        answers: &[String],
        multiple_choice: bool,
        fill_in_blank: bool,
    ) -> Result<Vec<Question>, GenerationError> {
        let pattern = if fill_in_blank {
            ProblemPattern::FillInBlank
        } else {
            ProblemPattern::OneShot
        };

        if multiple_choice {
            let items = self.gateway.generate_batch_mcq(answers, pattern).await?;
            ensure_batch_len(answers.len(), items.len())?;
            Ok(answers
                .iter()
                .zip(items)
                .map(|(answer, item)| {
                    Question::new(
                        vec![SubQuestion::with_choices(
                            item.question,
                            item.choices,
                            item.explanation,
                        )],
                        answer,
                        category_name,
                    )
                })
                .collect())
        } else {
            let items = self.gateway.generate_batch_qa(answers, pattern).await?;
            ensure_batch_len(answers.len(), items.len())?;
            Ok(answers
                .iter()
                .zip(items)
                .map(|(answer, item)| {
                    Question::new(
                        vec![SubQuestion::new(item.question, item.explanation)],
                        answer,
                        category_name,
                    )
                })
                .collect())
        }
    }

    /// Generate one additional phrasing for an existing question.
    ///
    /// Existing prompts are sent as duplicate-avoidance context. For
    /// choice-based types an empty service array yields `None` without an
    /// error. On failure the error message is recorded and `None` returned.
    pub async fn generate_sub_question(
        &mut self,
        question: &Question,
        question_type: QuestionType,
    ) -> Option<SubQuestion> {
        self.generating = true;
        self.last_error = None;

        let result = self.run_single(question, question_type).await;
        self.generating = false;

        match result {
            Ok(sub) => sub,
            Err(e) => {
                warn!(answer = %question.answer, error = %e, "sub-question generation failed");
                self.last_error = Some(e.to_string());
                None
            }
        }
    }

    async fn run_single(
        &self,
        question: &Question,
        question_type: QuestionType,
    ) -> Result<Option<SubQuestion>, GenerationError> {
        let existing = question.prompt_texts();
        let pattern = question_type.pattern();

        if question_type.is_choice_based() {
            let items = self
                .gateway
                .generate_single_mcq(&question.answer, &existing, pattern)
                .await?;
            if items.is_empty() {
                debug!(answer = %question.answer, "service returned no 4-choice item");
            }
            Ok(items.into_iter().next().map(|item| {
                SubQuestion::with_choices(item.question, item.choices, item.explanation)
            }))
        } else {
            let item = self
                .gateway
                .generate_single_qa(&question.answer, &existing, pattern)
                .await?;
            Ok(Some(SubQuestion::new(item.question, item.explanation)))
        }
    }
}

fn ensure_batch_len(expected: usize, actual: usize) -> Result<(), GenerationError> {
    if expected == actual {
        Ok(())
    } else {
        Err(GenerationError::MalformedResponse { expected, actual })
    }
}
