use crate::models::InvalidReceiptId;
use crate::service::{ScoreError, ServiceError};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// HTTP 层错误
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid receipt: {0}")]
    InvalidReceipt(#[from] JsonRejection),
    #[error(transparent)]
    InvalidId(#[from] InvalidReceiptId),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidReceipt(rejection) => json_error(
                StatusCode::BAD_REQUEST,
                "invalid_receipt",
                rejection.body_text(),
            ),
            ApiError::InvalidId(e) => json_error(StatusCode::BAD_REQUEST, "invalid_id", e.to_string()),
            ApiError::Service(ServiceError::Scoring(ScoreError::InvalidTimeFormat { .. })) => {
                json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_time",
                    "please check the date and time of the receipt provided",
                )
            }
            ApiError::Service(e @ ServiceError::NotFound(_)) => {
                json_error(StatusCode::NOT_FOUND, "not_found", e.to_string())
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
