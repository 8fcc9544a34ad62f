use super::scoring::{self, is_plain_decimal, ScoreError};
use crate::models::{Receipt, ReceiptId};
use crate::store::ScoreStore;
use bigdecimal::BigDecimal;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoreError),
    #[error("no receipt found for id {0}")]
    NotFound(ReceiptId),
}

/// 小票服务：评分、分配ID、保存积分
#[derive(Clone)]
pub struct ReceiptService {
    store: Arc<dyn ScoreStore>,
}

impl ReceiptService {
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self { store }
    }

    /// 评分成功后才分配ID并保存
    pub fn process(&self, receipt: &Receipt) -> Result<ReceiptId, ServiceError> {
        let breakdown = scoring::score_breakdown(receipt)?;
        let points = breakdown.total();

        if !declared_total_matches(receipt) {
            tracing::debug!(
                "Receipt from {:?}: declared total {:?} differs from item sum",
                receipt.retailer, receipt.total
            );
        }

        let id = self.store.next_id();
        self.store.put(id, points);

        tracing::debug!("Receipt {} breakdown: {:?}", id, breakdown);
        tracing::info!(
            "Receipt {} processed: retailer={:?}, items={}, points={}",
            id, receipt.retailer, receipt.items.len(), points
        );

        Ok(id)
    }

    pub fn points(&self, id: ReceiptId) -> Result<i64, ServiceError> {
        self.store.get(id).ok_or(ServiceError::NotFound(id))
    }

    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}

/// 无法解析的金额不参与比较
fn declared_total_matches(receipt: &Receipt) -> bool {
    if !is_plain_decimal(&receipt.total)
        || !receipt.items.iter().all(|item| is_plain_decimal(&item.price))
    {
        return false;
    }
    let Ok(declared) = BigDecimal::from_str(&receipt.total) else {
        return false;
    };
    let mut sum = BigDecimal::from(0);
    for item in &receipt.items {
        match BigDecimal::from_str(&item.price) {
            Ok(price) => sum += price,
            Err(_) => return false,
        }
    }
    sum == declared
}
