//! Extractive QA backend that scores spans from raw model logits

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http_client::{json_headers, HttpClientTrait};
use crate::domain::inference::{QuestionAnswerer, SpanLogits};
use crate::domain::DomainError;

const PROVIDER: &str = "question_answering";

/// QA backend for model servers that return token-level start/end logits.
///
/// The server receives `{"question", "context"}` and answers with the
/// tokenized input sequence and one start and one end logit per token.
#[derive(Debug)]
pub struct LogitsQuestionAnswerer<C: HttpClientTrait> {
    client: C,
    url: String,
    auth_header: Option<String>,
}

impl<C: HttpClientTrait> LogitsQuestionAnswerer<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            auth_header: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.auth_header = Some(format!("Bearer {}", api_key.into()));
        self
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<SpanLogits, DomainError> {
        let response: LogitsResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(PROVIDER, format!("Failed to parse QA response: {}", e))
        })?;

        SpanLogits::new(response.tokens, response.start_logits, response.end_logits)
            .map_err(|e| DomainError::provider(PROVIDER, e.to_string()))
    }
}

#[async_trait]
impl<C: HttpClientTrait> QuestionAnswerer for LogitsQuestionAnswerer<C> {
    async fn answer(&self, context: &str, question: &str) -> Result<String, DomainError> {
        let body = serde_json::json!({
            "question": question,
            "context": context,
        });

        let response = self
            .client
            .post_json(&self.url, json_headers(self.auth_header.as_deref()), &body)
            .await?;

        let logits = self.parse_response(response)?;
        let span = logits.best_span();
        let answer = logits.answer();

        debug!(
            tokens = logits.tokens().len(),
            span = ?span,
            answer_len = answer.len(),
            "Selected answer span"
        );

        Ok(answer)
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

#[derive(Debug, Deserialize)]
struct LogitsResponse {
    tokens: Vec<String>,
    start_logits: Vec<f32>,
    end_logits: Vec<f32>,
}
