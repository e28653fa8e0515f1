//! The quiz library aggregate.
//!
//! Owns the category list and the answer records from quiz rounds.
//! Mutations are silent no-ops when the addressed category or question does
//! not exist; the boolean return tells the caller whether anything changed.

use crate::quiz::answer::AnswerRecord;
use crate::quiz::entities::{Category, Question, SubQuestion};
use std::collections::HashSet;
use uuid::Uuid;

/// In-memory quiz library: categories plus recorded answers.
#[derive(Debug, Clone, Default)]
pub struct QuizLibrary {
    categories: Vec<Category>,
    answers: Vec<AnswerRecord>,
}

impl QuizLibrary {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            answers: Vec::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &Uuid) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == *id)
    }

    pub fn category_by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn add_category(&mut self, category: Category) {
        self.categories.push(category);
    }

    pub fn remove_category(&mut self, id: &Uuid) -> bool {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != *id);
        self.categories.len() != before
    }

    /// Append generated or hand-typed questions to a category.
    pub fn add_questions(&mut self, category_id: &Uuid, questions: Vec<Question>) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == *category_id) else {
            return false;
        };
        category.questions.extend(questions);
        true
    }

    pub fn remove_question(&mut self, category_id: &Uuid, question_id: &Uuid) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == *category_id) else {
            return false;
        };
        let before = category.questions.len();
        category.questions.retain(|q| q.id != *question_id);
        category.questions.len() != before
    }

    /// Append another phrasing to an existing question.
    pub fn append_sub_question(
        &mut self,
        category_id: &Uuid,
        question_id: &Uuid,
        sub: SubQuestion,
    ) -> bool {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == *category_id) else {
            return false;
        };
        let Some(question) = category.questions.iter_mut().find(|q| q.id == *question_id) else {
            return false;
        };
        question.append_sub_question(sub);
        true
    }

    pub fn record_answer(&mut self, record: AnswerRecord) {
        self.answers.push(record);
    }

    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    /// Drop recorded answers for the given questions (used when a category
    /// is re-quizzed from scratch).
    pub fn clear_answers(&mut self, question_ids: &HashSet<Uuid>) {
        self.answers.retain(|a| !question_ids.contains(&a.question_id));
    }

    /// How many recorded answers for this category were correct.
    pub fn correct_count(&self, category: &Category) -> usize {
        self.answers_for(category).filter(|a| a.correct).count()
    }

    /// How many answers have been recorded for this category.
    pub fn answered_count(&self, category: &Category) -> usize {
        self.answers_for(category).count()
    }

    fn answers_for<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a AnswerRecord> {
        self.answers
            .iter()
            .filter(|a| category.questions.iter().any(|q| q.id == a.question_id))
    }
}
