pub mod errors;
pub mod handlers;

pub use errors::{json_error, ApiError};
pub use handlers::*;

use crate::service::ReceiptService;
use crate::store::ScoreStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;

/// 共享状态
#[derive(Clone)]
pub struct AppState {
    pub receipts: ReceiptService,
}

impl AppState {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            receipts: ReceiptService::new(store),
        }
    }
}

/// 构建路由 (main 与集成测试共用)
pub fn build_app(state: AppState) -> Router {
    let receipt_routes = Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/:id/points", get(handlers::get_points))
        .with_state(state.receipts);

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(receipt_routes)
        .layer(ServiceBuilder::new())
}
