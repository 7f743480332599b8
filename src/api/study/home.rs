//! Welcome endpoint

use crate::api::types::{Json, MessageResponse};

pub const WELCOME_MESSAGE: &str = "Welcome to the Question Answering API!";

/// GET /
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME_MESSAGE))
}
