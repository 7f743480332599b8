//! PostgreSQL document repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::document::{Document, DocumentId, DocumentRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of DocumentRepository
#[derive(Debug, Clone)]
pub struct PostgresDocumentRepository {
    pool: PgPool,
}

impl PostgresDocumentRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn get(&self, id: DocumentId) -> Result<Option<Document>, DomainError> {
        let row = sqlx::query("SELECT id, content FROM document WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get document: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_document(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, content: &str) -> Result<Document, DomainError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO document (content) VALUES ($1) RETURNING id")
            .bind(content)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create document: {}", e)))?;

        Ok(Document::new(DocumentId::new(id), content))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM document")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count documents: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_document(row: &sqlx::postgres::PgRow) -> Result<Document, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Failed to read document id: {}", e)))?;
    let content: String = row
        .try_get("content")
        .map_err(|e| DomainError::storage(format!("Failed to read document content: {}", e)))?;

    Ok(Document::new(DocumentId::new(id), content))
}
