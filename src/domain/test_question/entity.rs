//! Test question entity

use serde::{Deserialize, Serialize};

use crate::domain::document::DocumentId;

/// Width of the `question` column
pub const MAX_QUESTION_CHARS: usize = 255;

/// Database-assigned test question identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestQuestionId(i64);

impl TestQuestionId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TestQuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TestQuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A test question that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTestQuestion {
    question: String,
    correct_answer: String,
    document_id: DocumentId,
}

impl NewTestQuestion {
    /// Build a new record. The question is cut to `MAX_QUESTION_CHARS` characters.
    pub fn new(
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        document_id: DocumentId,
    ) -> Self {
        Self {
            question: truncate_chars(question.into(), MAX_QUESTION_CHARS),
            correct_answer: correct_answer.into(),
            document_id,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn document_id(&self) -> DocumentId {
        self.document_id
    }

    /// Attach the ID assigned by storage
    pub fn into_stored(self, id: TestQuestionId) -> TestQuestion {
        TestQuestion {
            id,
            question: self.question,
            correct_answer: self.correct_answer,
            document_id: self.document_id,
        }
    }
}

/// A stored test question. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestQuestion {
    id: TestQuestionId,
    question: String,
    correct_answer: String,
    document_id: DocumentId,
}

impl TestQuestion {
    pub fn new(
        id: TestQuestionId,
        question: impl Into<String>,
        correct_answer: impl Into<String>,
        document_id: DocumentId,
    ) -> Self {
        Self {
            id,
            question: question.into(),
            correct_answer: correct_answer.into(),
            document_id,
        }
    }

    pub fn id(&self) -> TestQuestionId {
        self.id
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn document_id(&self) -> DocumentId {
        self.document_id
    }
}

fn truncate_chars(mut value: String, max_chars: usize) -> String {
    if let Some((byte_idx, _)) = value.char_indices().nth(max_chars) {
        value.truncate(byte_idx);
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_test_question_keeps_short_question() {
        let q = NewTestQuestion::new("Why is Paris important?", "Paris", DocumentId::new(1));

        assert_eq!(q.question(), "Why is Paris important?");
        assert_eq!(q.correct_answer(), "Paris");
        assert_eq!(q.document_id(), DocumentId::new(1));
    }

    #[test]
    fn test_new_test_question_truncates_long_question() {
        let long = "é".repeat(300);
        let q = NewTestQuestion::new(long, "answer", DocumentId::new(1));

        assert_eq!(q.question().chars().count(), MAX_QUESTION_CHARS);
    }

    #[test]
    fn test_into_stored() {
        let stored = NewTestQuestion::new("Q?", "A", DocumentId::new(3))
            .into_stored(TestQuestionId::new(9));

        assert_eq!(stored.id().value(), 9);
        assert_eq!(stored.question(), "Q?");
        assert_eq!(stored.document_id().value(), 3);
    }
}
