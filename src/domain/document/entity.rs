//! Document entity

use serde::{Deserialize, Serialize};

/// Database-assigned document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(i64);

impl DocumentId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DocumentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An uploaded text document. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    content: String,
}

impl Document {
    pub fn new(id: DocumentId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}
