pub mod api;
pub mod config;
pub mod models;
pub mod service;
pub mod store;

pub use api::{build_app, AppState};
pub use config::AppConfig;
pub use models::{LineItem, Receipt, ReceiptId};
pub use service::{score, score_breakdown, ReceiptService, ScoreError};
pub use store::{InMemoryScoreStore, ScoreStore};
