pub mod receipts;
pub mod scoring;

pub use receipts::{ReceiptService, ServiceError};
pub use scoring::{score, score_breakdown, ScoreBreakdown, ScoreError};
