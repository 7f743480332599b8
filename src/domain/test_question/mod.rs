//! Test question domain
//!
//! Comprehension questions generated from extracted answers, and the
//! template generator that produces them.

mod entity;
mod generator;
mod repository;

pub use entity::{NewTestQuestion, TestQuestion, TestQuestionId, MAX_QUESTION_CHARS};
pub use generator::{TestQuestionGenerator, FALLBACK_QUESTION};
pub use repository::TestQuestionRepository;

#[cfg(test)]
pub use repository::mock::MockTestQuestionRepository;
