//! Table creation at startup. There is no migration history; tables are
//! created when missing and otherwise left alone.

use sqlx::postgres::PgPool;
use tracing::info;

use crate::domain::DomainError;

const CREATE_DOCUMENT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS document (
        id BIGSERIAL PRIMARY KEY,
        content TEXT NOT NULL
    )
"#;

const CREATE_TEST_QUESTION_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS test_question (
        id BIGSERIAL PRIMARY KEY,
        question VARCHAR(255) NOT NULL,
        correct_answer TEXT NOT NULL,
        document_id BIGINT NOT NULL REFERENCES document(id)
    )
"#;

/// Create the `document` and `test_question` tables if absent
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DomainError> {
    for statement in [CREATE_DOCUMENT_TABLE, CREATE_TEST_QUESTION_TABLE] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create table: {}", e)))?;
    }

    info!("Database schema ready");
    Ok(())
}
