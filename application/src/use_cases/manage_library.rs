//! Library management use case.
//!
//! Wraps the [`QuizLibrary`] aggregate with persistence: the library is
//! loaded once at construction and every mutation is saved back through the
//! repository port (best-effort, like the aggregate itself). Answer records
//! live only for the process lifetime and are not persisted.

use crate::ports::category_repository::CategoryRepository;
use quizforge_domain::{AnswerRecord, Category, Question, QuizLibrary, SubQuestion};
use std::collections::HashSet;
use tracing::debug;
use uuid::Uuid;

pub struct LibraryService<R: CategoryRepository> {
    repository: R,
    library: QuizLibrary,
}

impl<R: CategoryRepository> LibraryService<R> {
    /// Load the library from the repository.
    pub fn new(repository: R) -> Self {
        let library = QuizLibrary::new(repository.load());
        debug!(categories = library.categories().len(), "library loaded");
        Self {
            repository,
            library,
        }
    }

    pub fn library(&self) -> &QuizLibrary {
        &self.library
    }

    pub fn add_category(&mut self, category: Category) {
        self.library.add_category(category);
        self.persist();
    }

    pub fn remove_category(&mut self, id: &Uuid) -> bool {
        let removed = self.library.remove_category(id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn add_questions(&mut self, category_id: &Uuid, questions: Vec<Question>) -> bool {
        let added = self.library.add_questions(category_id, questions);
        if added {
            self.persist();
        }
        added
    }

    pub fn remove_question(&mut self, category_id: &Uuid, question_id: &Uuid) -> bool {
        let removed = self.library.remove_question(category_id, question_id);
        if removed {
            self.persist();
        }
        removed
    }

    pub fn append_sub_question(
        &mut self,
        category_id: &Uuid,
        question_id: &Uuid,
        sub: SubQuestion,
    ) -> bool {
        let appended = self.library.append_sub_question(category_id, question_id, sub);
        if appended {
            self.persist();
        }
        appended
    }

    pub fn record_answer(&mut self, record: AnswerRecord) {
        self.library.record_answer(record);
    }

    pub fn clear_answers(&mut self, question_ids: &HashSet<Uuid>) {
        self.library.clear_answers(question_ids);
    }

    /// (correct, answered) counts for a category.
    pub fn score(&self, category: &Category) -> (usize, usize) {
        (
            self.library.correct_count(category),
            self.library.answered_count(category),
        )
    }

    fn persist(&self) {
        self.repository.save(self.library.categories());
    }
}
