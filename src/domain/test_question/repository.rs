//! Test question repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewTestQuestion, TestQuestion, TestQuestionId};
use crate::domain::DomainError;

/// Repository trait for test question storage
#[async_trait]
pub trait TestQuestionRepository: Send + Sync + Debug {
    /// Get a test question by its ID
    async fn get(&self, id: TestQuestionId) -> Result<Option<TestQuestion>, DomainError>;

    /// Store a new test question, assigning it an ID
    async fn create(&self, question: NewTestQuestion) -> Result<TestQuestion, DomainError>;

    /// Count stored test questions
    async fn count(&self) -> Result<usize, DomainError>;
}
