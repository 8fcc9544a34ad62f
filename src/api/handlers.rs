use super::errors::ApiError;
use crate::models::{PointsResponse, ProcessResponse, Receipt, ReceiptId};
use crate::service::ReceiptService;
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
};

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 提交小票并计算积分
pub async fn process_receipt(
    State(service): State<ReceiptService>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<(StatusCode, Json<ProcessResponse>), ApiError> {
    let Json(receipt) = payload.map_err(|e| {
        tracing::warn!("Rejected receipt body: {}", e.body_text());
        ApiError::from(e)
    })?;

    let id = service.process(&receipt).map_err(|e| {
        tracing::warn!("Receipt from {:?} not scored: {}", receipt.retailer, e);
        ApiError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(ProcessResponse { id })))
}

/// 查询小票积分
pub async fn get_points(
    State(service): State<ReceiptService>,
    Path(raw_id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    let id: ReceiptId = raw_id.parse()?;
    let points = service.points(id)?;
    Ok(Json(PointsResponse { points }))
}
