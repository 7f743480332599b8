//! Inference capabilities consumed by the study flow
//!
//! Each pretrained model is reached through one narrow trait so backends
//! can be swapped or faked in tests.

mod answerer;
mod similarity;
mod summarizer;

pub use answerer::{decode_wordpiece, QuestionAnswerer, SpanLogits};
pub use similarity::{
    cosine_similarity, Assessment, SimilarityScorer, TextEmbedder,
    DEFAULT_UNDERSTANDING_THRESHOLD,
};
pub use summarizer::{to_bullet_points, SummarizationParams, Summarizer, SUMMARIZE_PREFIX};

#[cfg(test)]
pub use answerer::mock::MockQuestionAnswerer;
#[cfg(test)]
pub use similarity::mock::{MockSimilarityScorer, MockTextEmbedder};
#[cfg(test)]
pub use summarizer::mock::MockSummarizer;
