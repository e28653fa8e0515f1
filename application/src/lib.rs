//! Application layer for quizforge
//!
//! Use cases and ports. The ports define how the application layer talks to
//! the generation service and to category storage; the adapters implementing
//! them live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::category_repository::CategoryRepository;
pub use ports::generation_gateway::{GenerationError, GenerationGateway, McqItem, QaItem};
pub use use_cases::generate_questions::QuestionGenerator;
pub use use_cases::manage_library::LibraryService;
