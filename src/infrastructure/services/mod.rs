//! Application services

mod study_service;

pub use study_service::{QueryOutcome, StudyService, DOCUMENT_NOT_FOUND, TEST_QUESTION_NOT_FOUND};
