//! Inference infrastructure - HTTP backends for the pretrained models

mod embedding;
mod factory;
mod http_client;
mod question_answering;
mod summarization;

pub use embedding::{EmbeddingSimilarityScorer, HuggingFaceEmbedder, OpenAiEmbedder};
pub use factory::{InferenceBackends, InferenceFactory};
pub use http_client::{HttpClient, HttpClientTrait};
pub use question_answering::LogitsQuestionAnswerer;
pub use summarization::HuggingFaceSummarizer;

#[cfg(test)]
pub use http_client::mock::MockHttpClient;
