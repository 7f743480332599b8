//! Domain layer - Core entities, repository traits and inference capabilities

pub mod document;
pub mod error;
pub mod inference;
pub mod test_question;

pub use document::{Document, DocumentId, DocumentRepository};
pub use error::DomainError;
pub use inference::{
    Assessment, QuestionAnswerer, SimilarityScorer, SummarizationParams, Summarizer, TextEmbedder,
};
pub use test_question::{
    NewTestQuestion, TestQuestion, TestQuestionGenerator, TestQuestionId, TestQuestionRepository,
};
