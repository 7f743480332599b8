//! Test question infrastructure module

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresTestQuestionRepository;
pub use repository::InMemoryTestQuestionRepository;
