//! Quiz library entities: categories, questions, answer records, and the
//! aggregate that owns them.

pub mod answer;
pub mod entities;
pub mod library;
