//! In-memory document repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::document::{Document, DocumentId, DocumentRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct DocumentTable {
    rows: BTreeMap<DocumentId, Document>,
    last_id: i64,
}

/// In-memory implementation of DocumentRepository.
///
/// IDs start at 1 and increase monotonically, like a SERIAL column.
#[derive(Debug, Default)]
pub struct InMemoryDocumentRepository {
    table: Arc<RwLock<DocumentTable>>,
}

impl InMemoryDocumentRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a document with this ID exists
    pub async fn contains(&self, id: DocumentId) -> bool {
        self.table.read().await.rows.contains_key(&id)
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn get(&self, id: DocumentId) -> Result<Option<Document>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create(&self, content: &str) -> Result<Document, DomainError> {
        let mut table = self.table.write().await;

        table.last_id += 1;
        let id = DocumentId::new(table.last_id);
        let document = Document::new(id, content);
        table.rows.insert(id, document.clone());

        Ok(document)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.table.read().await.rows.len())
    }
}
