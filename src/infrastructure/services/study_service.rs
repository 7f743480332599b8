//! Study service - upload, question answering and answer evaluation

use std::future::Future;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::inference::DEFAULT_UNDERSTANDING_THRESHOLD;
use crate::domain::{
    Assessment, Document, DocumentId, DomainError, NewTestQuestion, TestQuestion,
    TestQuestionGenerator, TestQuestionId,
};
use crate::infrastructure::inference::InferenceBackends;
use crate::infrastructure::observability::record_inference_request;
use crate::infrastructure::storage::Repositories;

pub const DOCUMENT_NOT_FOUND: &str = "Document not found.";
pub const TEST_QUESTION_NOT_FOUND: &str = "Test question not found.";

/// Result of answering a question about a document
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome {
    pub answer: String,
    pub bullet_points: Vec<String>,
    pub test_question: TestQuestion,
}

/// Orchestrates storage and inference for the study flow
#[derive(Debug)]
pub struct StudyService {
    repositories: Repositories,
    inference: InferenceBackends,
    generator: TestQuestionGenerator,
    understanding_threshold: f32,
}

impl StudyService {
    pub fn new(repositories: Repositories, inference: InferenceBackends) -> Self {
        Self {
            repositories,
            inference,
            generator: TestQuestionGenerator::new(),
            understanding_threshold: DEFAULT_UNDERSTANDING_THRESHOLD,
        }
    }

    pub fn with_generator(mut self, generator: TestQuestionGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_understanding_threshold(mut self, threshold: f32) -> Self {
        self.understanding_threshold = threshold;
        self
    }

    /// Store an uploaded document
    pub async fn upload_document(&self, content: &str) -> Result<Document, DomainError> {
        let document = self.repositories.documents.create(content).await?;
        info!(document_id = %document.id(), bytes = content.len(), "Document stored");
        Ok(document)
    }

    /// Answer `question` from a document's content and record a follow-up test question.
    ///
    /// The test question is stored only after every inference call succeeded.
    pub async fn answer_query(
        &self,
        document_id: Option<DocumentId>,
        question: &str,
    ) -> Result<QueryOutcome, DomainError> {
        let document = match document_id {
            Some(id) => self.repositories.documents.get(id).await?,
            None => None,
        }
        .ok_or_else(|| DomainError::not_found(DOCUMENT_NOT_FOUND))?;

        let answerer = &self.inference.answerer;
        let answer = timed("question_answering", answerer.provider_name(), async {
            answerer.answer(document.content(), question).await
        })
        .await?;

        let bullet_points = if answer.trim().is_empty() {
            debug!(document_id = %document.id(), "Empty answer, skipping summarization");
            Vec::new()
        } else {
            let summarizer = &self.inference.summarizer;
            timed("summarization", summarizer.provider_name(), async {
                summarizer.summarize(&answer).await
            })
            .await?
        };

        let question_text = self.generator.generate(&answer);
        let test_question = self
            .repositories
            .test_questions
            .create(NewTestQuestion::new(question_text, answer.clone(), document.id()))
            .await?;

        info!(
            document_id = %document.id(),
            test_question_id = %test_question.id(),
            bullet_points = bullet_points.len(),
            "Query answered"
        );

        Ok(QueryOutcome {
            answer,
            bullet_points,
            test_question,
        })
    }

    /// Score a learner's answer against the stored correct answer
    pub async fn evaluate_answer(
        &self,
        test_question_id: Option<TestQuestionId>,
        user_answer: &str,
    ) -> Result<Assessment, DomainError> {
        let test_question = match test_question_id {
            Some(id) => self.repositories.test_questions.get(id).await?,
            None => None,
        }
        .ok_or_else(|| DomainError::not_found(TEST_QUESTION_NOT_FOUND))?;

        let scorer = &self.inference.scorer;
        let score = timed("similarity", scorer.provider_name(), async {
            scorer
                .similarity(user_answer, test_question.correct_answer())
                .await
        })
        .await?;

        let assessment = Assessment::from_score(score, self.understanding_threshold);
        debug!(
            test_question_id = %test_question.id(),
            score,
            understood = assessment.understood(),
            "Answer evaluated"
        );

        Ok(assessment)
    }

    pub async fn document_count(&self) -> Result<usize, DomainError> {
        self.repositories.documents.count().await
    }

    pub async fn test_question_count(&self) -> Result<usize, DomainError> {
        self.repositories.test_questions.count().await
    }
}

async fn timed<T>(
    capability: &str,
    provider: &str,
    call: impl Future<Output = Result<T, DomainError>>,
) -> Result<T, DomainError> {
    let start = Instant::now();
    let result = call.await;

    record_inference_request(capability, provider, start.elapsed(), result.is_ok());

    if let Err(ref e) = result {
        warn!(capability, provider, error = %e, "Inference call failed");
    }

    result
}
