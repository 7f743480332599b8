//! Document domain
//!
//! Uploaded text documents that questions are asked against.

mod entity;
mod repository;

pub use entity::{Document, DocumentId};
pub use repository::DocumentRepository;

#[cfg(test)]
pub use repository::mock::MockDocumentRepository;
