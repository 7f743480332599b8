//! Question answering endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, QueryRequest, QueryResponse};
use crate::domain::DocumentId;

/// POST /query/
pub async fn query_document(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
    debug!(document_id = ?request.document_id, "Answering query");

    let outcome = state
        .study_service
        .answer_query(request.document_id.map(DocumentId::new), &request.question)
        .await?;

    Ok(Json(QueryResponse::from(outcome)))
}
