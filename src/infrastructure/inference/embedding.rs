//! Sentence-embedding backends and the cosine similarity scorer built on them

use async_trait::async_trait;
use serde::Deserialize;

use super::http_client::{json_headers, HttpClientTrait};
use crate::domain::inference::{cosine_similarity, SimilarityScorer, TextEmbedder};
use crate::domain::DomainError;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Hugging Face feature-extraction endpoint (e.g. all-MiniLM-L6-v2)
#[derive(Debug)]
pub struct HuggingFaceEmbedder<C: HttpClientTrait> {
    client: C,
    url: String,
    auth_header: Option<String>,
}

impl<C: HttpClientTrait> HuggingFaceEmbedder<C> {
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
}

#[async_trait]
impl<C: HttpClientTrait> TextEmbedder for HuggingFaceEmbedder<C> {
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, DomainError> {
        let body = serde_json::json!({ "inputs": texts });

        let response = self
            .client
            .post_json(&self.url, json_headers(self.auth_header.as_deref()), &body)
            .await?;

        let vectors: Vec<Vec<f32>> = serde_json::from_value(response).map_err(|e| {
            DomainError::provider("huggingface", format!("Failed to parse embeddings: {}", e))
        })?;

        check_count(self.provider_name(), texts.len(), vectors.len())?;
        Ok(vectors)
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }
}

/// OpenAI-compatible `/v1/embeddings` endpoint
#[derive(Debug)]
pub struct OpenAiEmbedder<C: HttpClientTrait> {
    client: C,
    auth_header: Option<String>,
    base_url: String,
    model: String,
}

impl<C: HttpClientTrait> OpenAiEmbedder<C> {
    pub fn new(client: C, model: impl Into<String>) -> Self {
        Self::with_base_url(client, model, DEFAULT_OPENAI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            auth_header: None,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.auth_header = Some(format!("Bearer {}", api_key.into()));
        self
    }

    fn embeddings_url(&self) -> String {
        format!("{}/v1/embeddings", self.base_url)
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<Vec<Vec<f32>>, DomainError> {
        let response: OpenAiEmbeddingResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("openai", format!("Failed to parse embedding response: {}", e))
        })?;

        let mut data = response.data;
        data.sort_by_key(|d| d.index);

        Ok(data.into_iter().map(|d| d.embedding).collect())
    }
}

#[async_trait]
impl<C: HttpClientTrait> TextEmbedder for OpenAiEmbedder<C> {
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, DomainError> {
        let body = serde_json::json!({
            "model": self.model,
            "input": texts,
        });

        let response = self
            .client
            .post_json(
                &self.embeddings_url(),
                json_headers(self.auth_header.as_deref()),
                &body,
            )
            .await?;

        let vectors = self.parse_response(response)?;
        check_count(self.provider_name(), texts.len(), vectors.len())?;
        Ok(vectors)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingResponse {
    data: Vec<OpenAiEmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct OpenAiEmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

fn check_count(provider: &str, expected: usize, actual: usize) -> Result<(), DomainError> {
    if expected != actual {
        return Err(DomainError::provider(
            provider,
            format!("Expected {} embeddings, got {}", expected, actual),
        ));
    }
    Ok(())
}

/// Scores two texts by the cosine similarity of their embeddings
#[derive(Debug)]
pub struct EmbeddingSimilarityScorer {
    embedder: Box<dyn TextEmbedder>,
}

impl EmbeddingSimilarityScorer {
    pub fn new(embedder: Box<dyn TextEmbedder>) -> Self {
        Self { embedder }
    }
}

#[async_trait]
impl SimilarityScorer for EmbeddingSimilarityScorer {
    async fn similarity(&self, a: &str, b: &str) -> Result<f32, DomainError> {
        let vectors = self.embedder.embed(&[a, b]).await?;

        match vectors.as_slice() {
            [first, second] => Ok(cosine_similarity(first, second)),
            _ => Err(DomainError::provider(
                self.embedder.provider_name(),
                "Expected exactly two embeddings",
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        self.embedder.provider_name()
    }
}
