//! Builds the inference backends from configuration

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::embedding::{EmbeddingSimilarityScorer, HuggingFaceEmbedder, OpenAiEmbedder};
use super::http_client::HttpClient;
use super::question_answering::LogitsQuestionAnswerer;
use super::summarization::HuggingFaceSummarizer;
use crate::config::{EmbeddingProviderType, InferenceConfig};
use crate::domain::inference::TextEmbedder;
use crate::domain::{DomainError, QuestionAnswerer, SimilarityScorer, Summarizer};

/// The three model capabilities the study flow depends on
#[derive(Debug, Clone)]
pub struct InferenceBackends {
    pub answerer: Arc<dyn QuestionAnswerer>,
    pub summarizer: Arc<dyn Summarizer>,
    pub scorer: Arc<dyn SimilarityScorer>,
}

/// Factory for HTTP inference backends
#[derive(Debug)]
pub struct InferenceFactory;

impl InferenceFactory {
    /// Create all backends, sharing one HTTP client configuration
    pub fn create(config: &InferenceConfig) -> Result<InferenceBackends, DomainError> {
        let client = HttpClient::with_timeout(Duration::from_secs(config.timeout_secs))?;

        let answerer = Self::create_answerer(client.clone(), config)?;
        let summarizer = Self::create_summarizer(client.clone(), config)?;
        let scorer = Self::create_scorer(client, config)?;

        info!(
            answerer = answerer.provider_name(),
            summarizer = summarizer.provider_name(),
            scorer = scorer.provider_name(),
            "Inference backends configured"
        );

        Ok(InferenceBackends {
            answerer,
            summarizer,
            scorer,
        })
    }

    fn create_answerer(
        client: HttpClient,
        config: &InferenceConfig,
    ) -> Result<Arc<dyn QuestionAnswerer>, DomainError> {
        let endpoint = &config.question_answering;
        require_url("inference.question_answering.url", &endpoint.url)?;

        let mut answerer = LogitsQuestionAnswerer::new(client, &endpoint.url);
        if let Some(key) = &endpoint.api_key {
            answerer = answerer.with_api_key(key);
        }

        Ok(Arc::new(answerer))
    }

    fn create_summarizer(
        client: HttpClient,
        config: &InferenceConfig,
    ) -> Result<Arc<dyn Summarizer>, DomainError> {
        let summarization = &config.summarization;
        require_url("inference.summarization.url", &summarization.url)?;

        let mut summarizer = HuggingFaceSummarizer::new(client, &summarization.url)
            .with_params(summarization.params.clone());
        if let Some(key) = &summarization.api_key {
            summarizer = summarizer.with_api_key(key);
        }

        Ok(Arc::new(summarizer))
    }

    fn create_scorer(
        client: HttpClient,
        config: &InferenceConfig,
    ) -> Result<Arc<dyn SimilarityScorer>, DomainError> {
        let embedding = &config.embedding;
        require_url("inference.embedding.url", &embedding.url)?;

        let embedder: Box<dyn TextEmbedder> = match embedding.provider {
            EmbeddingProviderType::HuggingFace => {
                let mut embedder = HuggingFaceEmbedder::new(client, &embedding.url);
                if let Some(key) = &embedding.api_key {
                    embedder = embedder.with_api_key(key);
                }
                Box::new(embedder)
            }
            EmbeddingProviderType::OpenAi => {
                let mut embedder =
                    OpenAiEmbedder::with_base_url(client, &embedding.model, &embedding.url);
                if let Some(key) = &embedding.api_key {
                    embedder = embedder.with_api_key(key);
                }
                Box::new(embedder)
            }
        };

        Ok(Arc::new(EmbeddingSimilarityScorer::new(embedder)))
    }
}

fn require_url(key: &str, url: &str) -> Result<(), DomainError> {
    if url.trim().is_empty() {
        return Err(DomainError::configuration(format!("{} must be set", key)));
    }
    Ok(())
}
