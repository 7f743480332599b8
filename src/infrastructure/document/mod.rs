//! Document infrastructure module

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresDocumentRepository;
pub use repository::InMemoryDocumentRepository;
