//! Infrastructure layer - storage, inference backends, services and observability

pub mod document;
pub mod inference;
pub mod logging;
pub mod observability;
pub mod services;
pub mod storage;
pub mod test_question;
