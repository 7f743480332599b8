//! PostgreSQL test question repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::document::DocumentId;
use crate::domain::test_question::{
    NewTestQuestion, TestQuestion, TestQuestionId, TestQuestionRepository,
};
use crate::domain::DomainError;

/// PostgreSQL implementation of TestQuestionRepository
#[derive(Debug, Clone)]
pub struct PostgresTestQuestionRepository {
    pool: PgPool,
}

impl PostgresTestQuestionRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestQuestionRepository for PostgresTestQuestionRepository {
    async fn get(&self, id: TestQuestionId) -> Result<Option<TestQuestion>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, question, correct_answer, document_id
            FROM test_question
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get test question: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_test_question(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, question: NewTestQuestion) -> Result<TestQuestion, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO test_question (question, correct_answer, document_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(question.question())
        .bind(question.correct_answer())
        .bind(question.document_id().value())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create test question: {}", e)))?;

        Ok(question.into_stored(TestQuestionId::new(id)))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM test_question")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count test questions: {}", e)))?;

        Ok(count as usize)
    }
}

fn row_to_test_question(row: &sqlx::postgres::PgRow) -> Result<TestQuestion, DomainError> {
    let read_err = |e: sqlx::Error| DomainError::storage(format!("Failed to read test question: {}", e));

    let id: i64 = row.try_get("id").map_err(read_err)?;
    let question: String = row.try_get("question").map_err(read_err)?;
    let correct_answer: String = row.try_get("correct_answer").map_err(read_err)?;
    let document_id: i64 = row.try_get("document_id").map_err(read_err)?;

    Ok(TestQuestion::new(
        TestQuestionId::new(id),
        question,
        correct_answer,
        DocumentId::new(document_id),
    ))
}
