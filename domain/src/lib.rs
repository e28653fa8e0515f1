//! Domain layer for quizforge
//!
//! This crate contains the core entities and value objects of the quiz
//! library: categories, questions, sub-questions, answer records, and the
//! problem-pattern vocabulary shared with the generation service.
//! It has no dependencies on infrastructure or presentation concerns.

pub mod pattern;
pub mod quiz;

// Re-export commonly used types
pub use pattern::ProblemPattern;
pub use quiz::{
    answer::AnswerRecord,
    entities::{Category, Question, QuestionType, SubQuestion},
    library::QuizLibrary,
};
