//! Semantic similarity between a learner's answer and the stored answer

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Similarity above which an answer counts as understood
pub const DEFAULT_UNDERSTANDING_THRESHOLD: f32 = 0.7;

/// Trait for sentence-embedding backends
#[async_trait]
pub trait TextEmbedder: Send + Sync + Debug {
    /// Embed each text into a fixed-length vector, in input order
    async fn embed(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

/// Trait for semantic similarity scoring
#[async_trait]
pub trait SimilarityScorer: Send + Sync + Debug {
    /// Similarity of `a` and `b`, in [-1, 1]
    async fn similarity(&self, a: &str, b: &str) -> Result<f32, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

/// Cosine of the angle between two vectors.
///
/// Returns 0.0 for empty, zero-norm or differently sized vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Outcome of scoring a learner's answer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    understood: bool,
    confidence: f64,
}

impl Assessment {
    /// `understood` iff `score > threshold`; confidence is the score as a percentage
    pub fn from_score(score: f32, threshold: f32) -> Self {
        Self {
            understood: score > threshold,
            confidence: f64::from(score) * 100.0,
        }
    }

    pub fn understood(&self) -> bool {
        self.understood
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }
}
