//! API request/response types

pub mod error;
pub mod json;
pub mod study;

pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
pub use study::{
    EvaluateRequest, EvaluateResponse, MessageResponse, QueryRequest, QueryResponse,
    UploadResponse,
};
