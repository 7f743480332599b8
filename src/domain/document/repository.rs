//! Document repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Document, DocumentId};
use crate::domain::DomainError;

/// Repository trait for document storage
#[async_trait]
pub trait DocumentRepository: Send + Sync + Debug {
    /// Get a document by its ID
    async fn get(&self, id: DocumentId) -> Result<Option<Document>, DomainError>;

    /// Store a new document, assigning it an ID
    async fn create(&self, content: &str) -> Result<Document, DomainError>;

    /// Count stored documents
    async fn count(&self) -> Result<usize, DomainError>;
}
