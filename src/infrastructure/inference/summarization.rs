//! Seq2seq summarization backend (Hugging Face text2text request format)

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http_client::{json_headers, HttpClientTrait};
use crate::domain::inference::{
    to_bullet_points, SummarizationParams, Summarizer, SUMMARIZE_PREFIX,
};
use crate::domain::DomainError;

const PROVIDER: &str = "summarization";

/// Summarizer backed by a Hugging Face style inference endpoint
#[derive(Debug)]
pub struct HuggingFaceSummarizer<C: HttpClientTrait> {
    client: C,
    url: String,
    auth_header: Option<String>,
    params: SummarizationParams,
}

impl<C: HttpClientTrait> HuggingFaceSummarizer<C> {
    pub fn new(client: C, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
            auth_header: None,
            params: SummarizationParams::default(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.auth_header = Some(format!("Bearer {}", api_key.into()));
        self
    }

    pub fn with_params(mut self, params: SummarizationParams) -> Self {
        self.params = params;
        self
    }

    /// Input longer than the model window is truncated by the server
    fn build_request(&self, text: &str) -> serde_json::Value {
        serde_json::json!({
            "inputs": format!("{}{}", SUMMARIZE_PREFIX, text),
            "parameters": {
                "max_length": self.params.max_length,
                "min_length": self.params.min_length,
                "length_penalty": self.params.length_penalty,
                "num_beams": self.params.num_beams,
                "early_stopping": self.params.early_stopping,
                "truncation": true,
            },
        })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, DomainError> {
        let outputs: Vec<GeneratedText> = serde_json::from_value(json).map_err(|e| {
            DomainError::provider(PROVIDER, format!("Failed to parse summary response: {}", e))
        })?;

        outputs
            .into_iter()
            .next()
            .and_then(|o| o.summary_text.or(o.generated_text))
            .ok_or_else(|| DomainError::provider(PROVIDER, "Response contained no summary"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> Summarizer for HuggingFaceSummarizer<C> {
    async fn summarize(&self, text: &str) -> Result<Vec<String>, DomainError> {
        let body = self.build_request(text);

        let response = self
            .client
            .post_json(&self.url, json_headers(self.auth_header.as_deref()), &body)
            .await?;

        let summary = self.parse_response(response)?;
        debug!(summary_len = summary.len(), "Generated summary");

        Ok(to_bullet_points(&summary))
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    summary_text: Option<String>,
    generated_text: Option<String>,
}
