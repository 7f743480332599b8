//! Follow-up question generation from fixed templates

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The one template that does not interpolate a word from the answer
pub const FALLBACK_QUESTION: &str = "Can you summarize the main idea in one sentence?";

const WORD_PLACEHOLDER: &str = "{word}";

const TEMPLATES: [&str; 4] = [
    "What does the document say about {word}?",
    FALLBACK_QUESTION,
    "Can you explain more about {word}?",
    "Why is {word} important in the context of the document?",
];

/// Picks one of the four question templates uniformly at random
#[derive(Debug)]
pub struct TestQuestionGenerator {
    rng: Mutex<StdRng>,
}

impl TestQuestionGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a generator with a fixed seed (reproducible sequences)
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generate a test question about `answer`.
    ///
    /// Templates interpolate the first whitespace-delimited word of the
    /// answer. An answer without words always yields `FALLBACK_QUESTION`.
    pub fn generate(&self, answer: &str) -> String {
        let Some(word) = answer.split_whitespace().next() else {
            return FALLBACK_QUESTION.to_string();
        };

        let index = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..TEMPLATES.len());

        TEMPLATES[index].replace(WORD_PLACEHOLDER, word)
    }

    /// All question shapes this generator can produce for `answer`
    pub fn candidates(answer: &str) -> Vec<String> {
        match answer.split_whitespace().next() {
            Some(word) => TEMPLATES
                .iter()
                .map(|t| t.replace(WORD_PLACEHOLDER, word))
                .collect(),
            None => vec![FALLBACK_QUESTION.to_string()],
        }
    }
}

impl Default for TestQuestionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate_uses_first_word() {
        let generator = TestQuestionGenerator::seeded(1);
        let candidates = TestQuestionGenerator::candidates("Paris is the capital");

        for _ in 0..20 {
            let question = generator.generate("Paris is the capital");
            assert!(candidates.contains(&question), "unexpected: {}", question);
        }
    }

    #[test]
    fn test_generate_covers_all_templates() {
        let generator = TestQuestionGenerator::seeded(42);
        let seen: HashSet<String> = (0..200).map(|_| generator.generate("France")).collect();

        assert_eq!(seen.len(), 4);
        assert!(seen.contains("What does the document say about France?"));
        assert!(seen.contains(FALLBACK_QUESTION));
        assert!(seen.contains("Can you explain more about France?"));
        assert!(seen.contains("Why is France important in the context of the document?"));
    }

    #[test]
    fn test_generate_empty_answer_falls_back() {
        let generator = TestQuestionGenerator::seeded(7);

        assert_eq!(generator.generate(""), FALLBACK_QUESTION);
        assert_eq!(generator.generate("   \n\t"), FALLBACK_QUESTION);
    }

    #[test]
    fn test_seeded_generators_agree() {
        let a = TestQuestionGenerator::seeded(99);
        let b = TestQuestionGenerator::seeded(99);

        for _ in 0..10 {
            assert_eq!(a.generate("capital city"), b.generate("capital city"));
        }
    }

    #[test]
    fn test_candidates_for_blank_answer() {
        assert_eq!(
            TestQuestionGenerator::candidates(""),
            vec![FALLBACK_QUESTION.to_string()]
        );
    }
}
