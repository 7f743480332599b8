//! Extractive question answering

use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

/// Trait for extractive question-answering backends
#[async_trait]
pub trait QuestionAnswerer: Send + Sync + Debug {
    /// Extract the answer to `question` from `context`
    async fn answer(&self, context: &str, question: &str) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}

const SPECIAL_TOKENS: &[&str] = &[
    "[CLS]", "[SEP]", "[PAD]", "[UNK]", "[MASK]", "<s>", "</s>", "<pad>", "<unk>",
];

/// Per-token start/end scores produced by a QA model for one input sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SpanLogits {
    tokens: Vec<String>,
    start_logits: Vec<f32>,
    end_logits: Vec<f32>,
}

impl SpanLogits {
    /// Build from model output. All three sequences must have equal length.
    pub fn new(
        tokens: Vec<String>,
        start_logits: Vec<f32>,
        end_logits: Vec<f32>,
    ) -> Result<Self, DomainError> {
        if tokens.len() != start_logits.len() || tokens.len() != end_logits.len() {
            return Err(DomainError::validation(format!(
                "Token/logit length mismatch: {} tokens, {} start logits, {} end logits",
                tokens.len(),
                start_logits.len(),
                end_logits.len()
            )));
        }

        Ok(Self {
            tokens,
            start_logits,
            end_logits,
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Positions of the maximum start logit and the maximum end logit.
    ///
    /// The two are chosen independently, so `end < start` is possible.
    pub fn best_span(&self) -> Option<(usize, usize)> {
        Some((argmax(&self.start_logits)?, argmax(&self.end_logits)?))
    }

    /// Decoded text of the best span; empty when `end < start`
    pub fn answer(&self) -> String {
        match self.best_span() {
            Some((start, end)) if start <= end => decode_wordpiece(&self.tokens[start..=end]),
            _ => String::new(),
        }
    }
}

/// First index of the largest value
fn argmax(values: &[f32]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| !value.is_nan())
        .fold(None, |best: Option<(usize, f32)>, (idx, &value)| match best {
            Some((_, best_value)) if value <= best_value => best,
            _ => Some((idx, value)),
        })
        .map(|(idx, _)| idx)
}

/// Join WordPiece tokens back into text, skipping special tokens
pub fn decode_wordpiece<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut text = String::new();

    for token in tokens.iter().map(AsRef::as_ref) {
        if SPECIAL_TOKENS.contains(&token) {
            continue;
        }

        if let Some(piece) = token.strip_prefix("##") {
            text.push_str(piece);
        } else {
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(token);
        }
    }

    clean_up_tokenization(&text)
}

fn clean_up_tokenization(text: &str) -> String {
    text.replace(" .", ".")
        .replace(" ?", "?")
        .replace(" !", "!")
        .replace(" ,", ",")
        .replace(" ' ", "'")
        .replace(" n't", "n't")
        .replace(" 'm", "'m")
        .replace(" 's", "'s")
        .replace(" 've", "'ve")
        .replace(" 're", "'re")
        .replace(" 'll", "'ll")
        .replace(" 'd", "'d")
}
