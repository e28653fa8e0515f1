//! Answer records for quiz rounds.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One user answer given during a quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub id: Uuid,
    pub question_id: Uuid,
    /// The specific phrasing that was shown, when known.
    pub sub_question_id: Option<Uuid>,
    pub answer_text: String,
    pub correct: bool,
    pub answered_at: DateTime<Utc>,
}

impl AnswerRecord {
    pub fn new(
        question_id: Uuid,
        sub_question_id: Option<Uuid>,
        answer_text: impl Into<String>,
        correct: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            question_id,
            sub_question_id,
            answer_text: answer_text.into(),
            correct,
            answered_at: Utc::now(),
        }
    }
}
