//! In-memory test question repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::test_question::{
    NewTestQuestion, TestQuestion, TestQuestionId, TestQuestionRepository,
};
use crate::domain::DomainError;
use crate::infrastructure::document::InMemoryDocumentRepository;

#[derive(Debug, Default)]
struct TestQuestionTable {
    rows: BTreeMap<TestQuestionId, TestQuestion>,
    last_id: i64,
}

/// In-memory implementation of TestQuestionRepository.
///
/// Checks `document_id` against the document repository the way the
/// foreign key does in PostgreSQL.
#[derive(Debug)]
pub struct InMemoryTestQuestionRepository {
    table: Arc<RwLock<TestQuestionTable>>,
    documents: Arc<InMemoryDocumentRepository>,
}

impl InMemoryTestQuestionRepository {
    pub fn new(documents: Arc<InMemoryDocumentRepository>) -> Self {
        Self {
            table: Arc::new(RwLock::new(TestQuestionTable::default())),
            documents,
        }
    }
}

#[async_trait]
impl TestQuestionRepository for InMemoryTestQuestionRepository {
    async fn get(&self, id: TestQuestionId) -> Result<Option<TestQuestion>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, question: NewTestQuestion) -> Result<TestQuestion, DomainError> {
        if !self.documents.contains(question.document_id()).await {
            return Err(DomainError::storage(format!(
                "Failed to create test question: document {} does not exist",
                question.document_id()
            )));
        }

        let mut table = self.table.write().await;

        table.last_id += 1;
        let stored = question.into_stored(TestQuestionId::new(table.last_id));
        table.rows.insert(stored.id(), stored.clone());

        Ok(stored)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.table.read().await.rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocumentId, DocumentRepository};

    #[tokio::test]
    async fn test_create_and_get() {
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let doc = documents.create("Paris is the capital of France.").await.unwrap();
        let repo = InMemoryTestQuestionRepository::new(documents);

        let stored = repo
            .create(NewTestQuestion::new("Why is paris important?", "paris", doc.id()))
            .await
            .unwrap();

        assert_eq!(stored.id().value(), 1);
        let found = repo.get(stored.id()).await.unwrap().unwrap();
        assert_eq!(found.correct_answer(), "paris");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_document() {
        let repo = InMemoryTestQuestionRepository::new(Arc::new(InMemoryDocumentRepository::new()));

        let result = repo
            .create(NewTestQuestion::new("Q?", "A", DocumentId::new(5)))
            .await;

        assert!(matches!(result, Err(DomainError::Storage { .. })));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryTestQuestionRepository::new(Arc::new(InMemoryDocumentRepository::new()));
        assert!(repo.get(TestQuestionId::new(1)).await.unwrap().is_none());
    }
}
