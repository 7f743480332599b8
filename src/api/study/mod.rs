//! Document study endpoints: upload, query and evaluate

pub mod evaluate;
pub mod home;
pub mod query;
pub mod upload;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create the study router. Paths keep their trailing slash.
pub fn create_study_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/upload/", post(upload::upload_document))
        .route("/query/", post(query::query_document))
        .route("/evaluate/", post(evaluate::evaluate_answer))
}
