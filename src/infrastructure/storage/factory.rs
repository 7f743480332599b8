//! Storage factory for runtime backend selection

use std::sync::Arc;

use serde::Deserialize;
use sqlx::postgres::PgPool;

use crate::domain::{DocumentRepository, DomainError, TestQuestionRepository};
use crate::infrastructure::document::{InMemoryDocumentRepository, PostgresDocumentRepository};
use crate::infrastructure::test_question::{
    InMemoryTestQuestionRepository, PostgresTestQuestionRepository,
};

use super::postgres::{connect, PostgresConfig};
use super::schema::ensure_schema;

/// Supported storage types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    #[serde(rename = "memory", alias = "in_memory", alias = "inmemory")]
    InMemory,
    /// PostgreSQL storage
    #[default]
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
}

/// The repositories the application runs on
#[derive(Debug, Clone)]
pub struct Repositories {
    pub documents: Arc<dyn DocumentRepository>,
    pub test_questions: Arc<dyn TestQuestionRepository>,
}

/// Factory for creating repository sets
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Creates repositories for the given backend. For PostgreSQL this
    /// connects and creates missing tables.
    pub async fn create(
        storage_type: StorageType,
        config: &PostgresConfig,
    ) -> Result<Repositories, DomainError> {
        match storage_type {
            StorageType::InMemory => Ok(Self::in_memory()),
            StorageType::Postgres => {
                let pool = connect(config).await?;
                ensure_schema(&pool).await?;
                Ok(Self::postgres(pool))
            }
        }
    }

    /// In-memory repositories sharing one document table
    pub fn in_memory() -> Repositories {
        let documents = Arc::new(InMemoryDocumentRepository::new());
        let test_questions = Arc::new(InMemoryTestQuestionRepository::new(documents.clone()));

        Repositories {
            documents,
            test_questions,
        }
    }

    /// PostgreSQL repositories on an existing pool
    pub fn postgres(pool: PgPool) -> Repositories {
        Repositories {
            documents: Arc::new(PostgresDocumentRepository::new(pool.clone())),
            test_questions: Arc::new(PostgresTestQuestionRepository::new(pool)),
        }
    }
}
