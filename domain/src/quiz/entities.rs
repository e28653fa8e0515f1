//! Question and category entities.
//!
//! A [`Category`] exclusively owns its [`Question`]s, and a `Question`
//! exclusively owns its [`SubQuestion`]s. Every sub-question within a
//! question is a different phrasing of the same canonical answer.

use crate::pattern::ProblemPattern;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One phrasing of a question: prompt text, optional 4-choice list, and an
/// explanation shown after answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubQuestion {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub choices: Option<Vec<String>>,
    #[serde(rename = "explain")]
    pub explanation: String,
}

impl SubQuestion {
    /// Create a free-response sub-question.
    pub fn new(prompt: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            choices: None,
            explanation: explanation.into(),
        }
    }

    /// Create a multiple-choice sub-question with an ordered choice list.
    pub fn with_choices(
        prompt: impl Into<String>,
        choices: Vec<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt: prompt.into(),
            choices: Some(choices),
            explanation: explanation.into(),
        }
    }

    /// Whether this sub-question carries a choice list.
    pub fn is_choice_based(&self) -> bool {
        self.choices.is_some()
    }
}

/// A question: a non-empty ordered list of sub-questions sharing one
/// canonical answer, labeled with the category it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(rename = "questions")]
    prompts: Vec<SubQuestion>,
    pub answer: String,
    pub category: String,
}

impl Question {
    /// Create a new question.
    ///
    /// # Panics
    /// Panics if `prompts` is empty.
    pub fn new(
        prompts: Vec<SubQuestion>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        assert!(!prompts.is_empty(), "Question must have at least one prompt");
        Self {
            id: Uuid::new_v4(),
            prompts,
            answer: answer.into(),
            category: category.into(),
        }
    }

    /// Try to create a new question, returning None when `prompts` is empty.
    pub fn try_new(
        prompts: Vec<SubQuestion>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Option<Self> {
        if prompts.is_empty() {
            None
        } else {
            Some(Self::new(prompts, answer, category))
        }
    }

    /// The ordered sub-questions.
    pub fn prompts(&self) -> &[SubQuestion] {
        &self.prompts
    }

    /// Prompt texts in order, used as duplicate-avoidance context when
    /// generating further sub-questions for the same answer.
    pub fn prompt_texts(&self) -> Vec<String> {
        self.prompts.iter().map(|p| p.prompt.clone()).collect()
    }

    /// Append another phrasing for the same answer.
    pub fn append_sub_question(&mut self, sub: SubQuestion) {
        self.prompts.push(sub);
    }
}

/// Kind of questions a category holds. The serialized literals are the
/// labels stored workbook data already carries, so they stay as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "記述式問題")]
    FreeText,
    #[serde(rename = "4択問題")]
    MultipleChoice,
    #[serde(rename = "穴埋め4択問題")]
    FillInBlankMultipleChoice,
    #[serde(rename = "記述式穴埋め問題")]
    FillInBlankFreeText,
}

impl QuestionType {
    pub const ALL: [QuestionType; 4] = [
        QuestionType::FreeText,
        QuestionType::MultipleChoice,
        QuestionType::FillInBlankMultipleChoice,
        QuestionType::FillInBlankFreeText,
    ];

    /// Whether questions of this type carry a 4-choice list.
    pub fn is_choice_based(&self) -> bool {
        matches!(
            self,
            Self::MultipleChoice | Self::FillInBlankMultipleChoice
        )
    }

    /// Whether questions of this type use the fill-in-the-blank style.
    pub fn is_fill_in_blank(&self) -> bool {
        matches!(
            self,
            Self::FillInBlankMultipleChoice | Self::FillInBlankFreeText
        )
    }

    /// The generation pattern for this question type.
    pub fn pattern(&self) -> ProblemPattern {
        if self.is_fill_in_blank() {
            ProblemPattern::FillInBlank
        } else {
            ProblemPattern::OneShot
        }
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    /// Parse the CLI-facing names (`free-text`, `mcq`, `blank-mcq`,
    /// `blank-free-text`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free-text" => Ok(Self::FreeText),
            "mcq" => Ok(Self::MultipleChoice),
            "blank-mcq" => Ok(Self::FillInBlankMultipleChoice),
            "blank-free-text" => Ok(Self::FillInBlankFreeText),
            other => Err(format!(
                "unknown question type '{other}' (expected free-text, mcq, blank-mcq, or blank-free-text)"
            )),
        }
    }
}

/// A quiz category: a named, icon-tagged collection of questions of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "iconName")]
    pub icon: String,
    pub questions: Vec<Question>,
    #[serde(rename = "questionType")]
    pub question_type: QuestionType,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        questions: Vec<Question>,
        question_type: QuestionType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            icon: icon.into(),
            questions,
            question_type,
        }
    }
}
