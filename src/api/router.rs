//! HTTP router assembly

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::study;

/// Create the full router with application state.
///
/// Request bodies larger than `max_upload_bytes` are rejected with 413.
pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        // Upload, query and evaluate
        .merge(study::create_study_router())
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::document::MockDocumentRepository;
    use crate::domain::inference::{MockQuestionAnswerer, MockSimilarityScorer, MockSummarizer};
    use crate::domain::test_question::MockTestQuestionRepository;
    use crate::domain::TestQuestionGenerator;
    use crate::infrastructure::inference::InferenceBackends;
    use crate::infrastructure::services::StudyService;
    use crate::infrastructure::storage::{Repositories, StorageFactory};

    const BOUNDARY: &str = "qat-test-boundary";
    const LIMIT: usize = 64 * 1024;

    fn backends(answer: &str, score: f32) -> InferenceBackends {
        InferenceBackends {
            answerer: Arc::new(MockQuestionAnswerer::new(answer)),
            summarizer: Arc::new(MockSummarizer::new(
                "Paris is the capital of France. It is a large city.",
            )),
            scorer: Arc::new(MockSimilarityScorer::new(score)),
        }
    }

    fn app_with(repositories: Repositories, inference: InferenceBackends) -> Router {
        service_app(repositories, inference).0
    }

    /// Router plus a handle on the service behind it, for row-count checks
    fn service_app(
        repositories: Repositories,
        inference: InferenceBackends,
    ) -> (Router, Arc<StudyService>) {
        let service = Arc::new(
            StudyService::new(repositories, inference)
                .with_generator(TestQuestionGenerator::seeded(11)),
        );
        let router = create_router(AppState::new(service.clone()), LIMIT);
        (router, service)
    }

    fn app(answer: &str, score: f32) -> Router {
        app_with(StorageFactory::in_memory(), backends(answer, score))
    }

    fn multipart_part(name: &str, filename: Option<&str>, content: &[u8]) -> Vec<u8> {
        let disposition = match filename {
            Some(f) => format!("form-data; name=\"{}\"; filename=\"{}\"", name, f),
            None => format!("form-data; name=\"{}\"", name),
        };
        let mut part = format!(
            "--{}\r\nContent-Disposition: {}\r\nContent-Type: text/plain\r\n\r\n",
            BOUNDARY, disposition
        )
        .into_bytes();
        part.extend_from_slice(content);
        part.extend_from_slice(b"\r\n");
        part
    }

    fn upload_request(parts: Vec<Vec<u8>>) -> Request<Body> {
        let mut body: Vec<u8> = parts.concat();
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method("POST")
            .uri("/upload/")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .header(header::CONTENT_LENGTH, body.len())
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn upload(app: &Router, content: &str) -> i64 {
        let (status, body) = send(
            app,
            upload_request(vec![multipart_part("file", Some("notes.txt"), content.as_bytes())]),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = body["document_id"].as_i64().unwrap();
        assert!(id > 0);
        id
    }

    #[tokio::test]
    async fn test_home() {
        let (status, body) = send(&app("paris", 0.9), get_request("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Welcome to the Question Answering API!"}));
    }

    #[tokio::test]
    async fn test_upload_document() {
        let app = app("paris", 0.9);

        let (status, body) = send(
            &app,
            upload_request(vec![multipart_part(
                "file",
                Some("notes.txt"),
                b"Paris is the capital of France.",
            )]),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Document uploaded successfully!");
        let first = body["document_id"].as_i64().unwrap();

        let second = upload(&app, "Another document.").await;
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let app = app("paris", 0.9);

        let (status, body) = send(
            &app,
            upload_request(vec![multipart_part("notes", Some("notes.txt"), b"text")]),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"message": "No file uploaded."}));
    }

    #[tokio::test]
    async fn test_upload_field_without_filename_is_not_a_file() {
        let app = app("paris", 0.9);

        let (status, body) = send(
            &app,
            upload_request(vec![multipart_part("file", None, b"text")]),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "No file uploaded.");
    }

    #[tokio::test]
    async fn test_upload_without_multipart_body() {
        let app = app("paris", 0.9);

        let (status, body) = send(&app, json_request("/upload/", json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "No file uploaded.");
    }

    #[tokio::test]
    async fn test_upload_rejects_invalid_utf8() {
        let app = app("paris", 0.9);

        let (status, body) = send(
            &app,
            upload_request(vec![multipart_part("file", Some("bin.dat"), &[0xff, 0xfe, 0x00])]),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Uploaded file is not valid UTF-8 text.");
    }

    #[tokio::test]
    async fn test_rejected_uploads_store_nothing() {
        let (app, service) = service_app(StorageFactory::in_memory(), backends("paris", 0.9));
        upload(&app, "Kept document.").await;
        let before = service.document_count().await.unwrap();

        let (no_file, _) = send(
            &app,
            upload_request(vec![multipart_part("notes", Some("notes.txt"), b"text")]),
        )
        .await;
        let (bad_bytes, _) = send(
            &app,
            upload_request(vec![multipart_part("file", Some("bin.dat"), &[0xff])]),
        )
        .await;

        assert_eq!(no_file, StatusCode::BAD_REQUEST);
        assert_eq!(bad_bytes, StatusCode::BAD_REQUEST);
        assert_eq!(service.document_count().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_evaluate_is_repeatable_and_read_only() {
        let (app, service) = service_app(StorageFactory::in_memory(), backends("paris", 0.9));
        let document_id = upload(&app, "Paris is the capital of France.").await;
        let (_, query) = send(
            &app,
            json_request("/query/", json!({"document_id": document_id, "question": "Capital?"})),
        )
        .await;
        let questions = service.test_question_count().await.unwrap();
        let body = json!({"user_answer": "Paris", "test_question_id": query["test_question_id"]});

        let (first_status, first) = send(&app, json_request("/evaluate/", body.clone())).await;
        let (second_status, second) = send(&app, json_request("/evaluate/", body)).await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(service.test_question_count().await.unwrap(), questions);
    }

    #[tokio::test]
    async fn test_upload_over_limit() {
        let app = app("paris", 0.9);
        let big = vec![b'a'; LIMIT + 1];

        let response = app
            .clone()
            .oneshot(upload_request(vec![multipart_part("file", Some("big.txt"), &big)]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_query_unknown_document() {
        let app = app("paris", 0.9);

        let (status, body) = send(
            &app,
            json_request("/query/", json!({"document_id": 424242, "question": "What?"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Document not found."}));
    }

    #[tokio::test]
    async fn test_query_missing_document_id() {
        let app = app("paris", 0.9);

        let (status, body) = send(&app, json_request("/query/", json!({"question": "What?"}))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Document not found.");
    }

    #[tokio::test]
    async fn test_query_malformed_json() {
        let app = app("paris", 0.9);
        let request = Request::builder()
            .method("POST")
            .uri("/query/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let (status, body) = send(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON syntax"));
    }

    #[tokio::test]
    async fn test_query_then_evaluate() {
        let app = app("paris", 0.9);
        let document_id = upload(&app, "Paris is the capital of France.").await;

        let (status, body) = send(
            &app,
            json_request(
                "/query/",
                json!({"document_id": document_id, "question": "What is the capital of France?"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"], "paris");
        assert_eq!(
            body["bullet_points"],
            json!(["- Paris is the capital of France", "- It is a large city."])
        );
        let question = body["test_question"].as_str().unwrap().to_string();
        assert!(TestQuestionGenerator::candidates("paris").contains(&question));
        let test_question_id = body["test_question_id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            json_request(
                "/evaluate/",
                json!({"user_answer": "Paris", "test_question_id": test_question_id}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["knowledge_understood"], true);
        let confidence = body["knowledge_confidence"].as_f64().unwrap();
        assert!((confidence - 90.0).abs() < 1e-3);
    }

    #[tokio::test]
    async fn test_evaluate_below_threshold() {
        let app = app("paris", 0.7);
        let document_id = upload(&app, "Paris is the capital of France.").await;
        let (_, body) = send(
            &app,
            json_request("/query/", json!({"document_id": document_id, "question": "Capital?"})),
        )
        .await;

        let (status, body) = send(
            &app,
            json_request(
                "/evaluate/",
                json!({"user_answer": "Lyon", "test_question_id": body["test_question_id"]}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["knowledge_understood"], false);
    }

    #[tokio::test]
    async fn test_evaluate_unknown_test_question() {
        let app = app("paris", 0.9);

        let (status, body) = send(
            &app,
            json_request("/evaluate/", json!({"user_answer": "x", "test_question_id": 77})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"message": "Test question not found."}));
    }

    #[tokio::test]
    async fn test_inference_failure_is_service_unavailable() {
        let app = app_with(
            StorageFactory::in_memory(),
            InferenceBackends {
                answerer: Arc::new(MockQuestionAnswerer::new("x").with_error("model offline")),
                summarizer: Arc::new(MockSummarizer::new("x")),
                scorer: Arc::new(MockSimilarityScorer::new(0.5)),
            },
        );
        let document_id = upload(&app, "text").await;

        let (status, body) = send(
            &app,
            json_request("/query/", json!({"document_id": document_id, "question": "q"})),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(body["message"].as_str().unwrap().contains("model offline"));
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let app = app("paris", 0.9);

        let (status, body) = send(&app, get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(&app, get_request("/ready")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_ready_fails_when_storage_fails() {
        let documents = Arc::new(MockDocumentRepository::new());
        documents.set_should_fail(true).await;
        let repositories = Repositories {
            documents,
            test_questions: Arc::new(MockTestQuestionRepository::new()),
        };
        let app = app_with(repositories, backends("paris", 0.9));

        let (status, body) = send(&app, get_request("/ready")).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unhealthy");
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let app = app("paris", 0.9);
        let request = Request::builder()
            .uri("/health")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.headers()["x-request-id"], "req-42");
    }
}
