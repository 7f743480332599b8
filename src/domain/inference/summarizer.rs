//! Abstractive summarization into bullet points

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::DomainError;

/// Task prefix expected by T5-style seq2seq models
pub const SUMMARIZE_PREFIX: &str = "summarize: ";

/// Trait for summarization backends
#[async_trait]
pub trait Summarizer: Send + Sync + Debug {
    /// Summarize `text` and return the summary as bullet points
    async fn summarize(&self, text: &str) -> Result<Vec<String>, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

/// Decoding parameters sent with every summarization request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizationParams {
    pub max_length: u32,
    pub min_length: u32,
    pub length_penalty: f32,
    pub num_beams: u32,
    pub early_stopping: bool,
}

impl Default for SummarizationParams {
    fn default() -> Self {
        Self {
            max_length: 100,
            min_length: 30,
            length_penalty: 2.0,
            num_beams: 4,
            early_stopping: true,
        }
    }
}

/// Split a generated summary on `". "` into `"- "` prefixed bullet points.
///
/// Fragments are trimmed and empty ones dropped.
pub fn to_bullet_points(summary: &str) -> Vec<String> {
    summary
        .split(". ")
        .map(str::trim)
        .filter(|point| !point.is_empty())
        .map(|point| format!("- {}", point))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_points_split_on_sentence_boundary() {
        let points = to_bullet_points("Paris is the capital. It is in France. It is large.");

        assert_eq!(
            points,
            vec!["- Paris is the capital", "- It is in France", "- It is large."]
        );
    }

    #[test]
    fn test_bullet_points_drop_empty_fragments() {
        let points = to_bullet_points("First point.  . Second point. ");

        assert_eq!(points, vec!["- First point", "- Second point"]);
        assert!(points.iter().all(|p| p.starts_with("- ") && p.len() > 2));
    }

    #[test]
    fn test_bullet_points_of_blank_summary() {
        assert!(to_bullet_points("").is_empty());
        assert!(to_bullet_points("   ").is_empty());
    }

    #[test]
    fn test_default_params() {
        let params = SummarizationParams::default();

        assert_eq!(params.max_length, 100);
        assert_eq!(params.min_length, 30);
        assert_eq!(params.length_penalty, 2.0);
        assert_eq!(params.num_beams, 4);
        assert!(params.early_stopping);
    }
}
