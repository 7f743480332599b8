//! Request and response bodies of the study endpoints

use serde::{Deserialize, Serialize};

use crate::domain::Assessment;
use crate::infrastructure::services::QueryOutcome;

/// Plain `{"message": ...}` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response to a successful upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub message: String,
    pub document_id: i64,
}

/// POST /query/ body. A missing `document_id` is treated as unknown.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub document_id: Option<i64>,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    pub bullet_points: Vec<String>,
    pub test_question: String,
    pub test_question_id: i64,
}

impl From<QueryOutcome> for QueryResponse {
    fn from(outcome: QueryOutcome) -> Self {
        Self {
            test_question: outcome.test_question.question().to_string(),
            test_question_id: outcome.test_question.id().value(),
            answer: outcome.answer,
            bullet_points: outcome.bullet_points,
        }
    }
}

/// POST /evaluate/ body. A missing `test_question_id` is treated as unknown.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateRequest {
    pub user_answer: String,
    #[serde(default)]
    pub test_question_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    pub knowledge_understood: bool,
    pub knowledge_confidence: f64,
}

impl From<Assessment> for EvaluateResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            knowledge_understood: assessment.understood(),
            knowledge_confidence: assessment.confidence(),
        }
    }
}
