//! Application state for shared services

use std::sync::Arc;

use crate::domain::{Assessment, Document, DocumentId, DomainError, TestQuestionId};
use crate::infrastructure::services::{QueryOutcome, StudyService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub study_service: Arc<dyn StudyServiceTrait>,
}

impl AppState {
    pub fn new(study_service: Arc<dyn StudyServiceTrait>) -> Self {
        Self { study_service }
    }
}

/// Trait for the study flow operations
#[async_trait::async_trait]
pub trait StudyServiceTrait: Send + Sync {
    async fn upload_document(&self, content: &str) -> Result<Document, DomainError>;
    async fn answer_query(
        &self,
        document_id: Option<DocumentId>,
        question: &str,
    ) -> Result<QueryOutcome, DomainError>;
    async fn evaluate_answer(
        &self,
        test_question_id: Option<TestQuestionId>,
        user_answer: &str,
    ) -> Result<Assessment, DomainError>;
    async fn document_count(&self) -> Result<usize, DomainError>;
    async fn test_question_count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl StudyServiceTrait for StudyService {
    async fn upload_document(&self, content: &str) -> Result<Document, DomainError> {
        StudyService::upload_document(self, content).await
    }

    async fn answer_query(
        &self,
        document_id: Option<DocumentId>,
        question: &str,
    ) -> Result<QueryOutcome, DomainError> {
        StudyService::answer_query(self, document_id, question).await
    }

    async fn evaluate_answer(
        &self,
        test_question_id: Option<TestQuestionId>,
        user_answer: &str,
    ) -> Result<Assessment, DomainError> {
        StudyService::evaluate_answer(self, test_question_id, user_answer).await
    }

    async fn document_count(&self) -> Result<usize, DomainError> {
        StudyService::document_count(self).await
    }

    async fn test_question_count(&self) -> Result<usize, DomainError> {
        StudyService::test_question_count(self).await
    }
}
