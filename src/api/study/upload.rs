//! Document upload endpoint

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UploadResponse};

pub const FILE_FIELD: &str = "file";
pub const NO_FILE_UPLOADED: &str = "No file uploaded.";
pub const NOT_UTF8: &str = "Uploaded file is not valid UTF-8 text.";
pub const UPLOAD_SUCCESS: &str = "Document uploaded successfully!";

/// POST /upload/
///
/// Stores the `file` part of a multipart form as a new document. A part
/// without a filename is not a file.
pub async fn upload_document(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    // A request that is not multipart at all carries no file either
    let Ok(mut multipart) = multipart else {
        return Err(ApiError::bad_request(NO_FILE_UPLOADED));
    };

    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::new(e.status(), e.body_text()))?
    {
        let is_file = field.name() == Some(FILE_FIELD)
            && field.file_name().is_some_and(|name| !name.is_empty());

        if !is_file {
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::new(e.status(), e.body_text()))?;
        upload = Some(bytes);
        break;
    }

    let bytes = upload.ok_or_else(|| ApiError::bad_request(NO_FILE_UPLOADED))?;
    let content = std::str::from_utf8(&bytes).map_err(|_| ApiError::bad_request(NOT_UTF8))?;

    debug!(bytes = bytes.len(), "Received document upload");

    let document = state.study_service.upload_document(content).await?;

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: UPLOAD_SUCCESS.to_string(),
            document_id: document.id().value(),
        }),
    ))
}
