//! Answer evaluation endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, EvaluateRequest, EvaluateResponse, Json};
use crate::domain::TestQuestionId;

/// POST /evaluate/
pub async fn evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    debug!(test_question_id = ?request.test_question_id, "Evaluating answer");

    let assessment = state
        .study_service
        .evaluate_answer(
            request.test_question_id.map(TestQuestionId::new),
            &request.user_answer,
        )
        .await?;

    Ok(Json(EvaluateResponse::from(assessment)))
}
