use serde::{Deserialize, Serialize};

/// 小票明细行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub short_description: String,
    pub price: String, // 金额文本，如 "12.25"
}

impl LineItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// 购物小票
///
/// 日期、时间与金额均保留原始文本，由评分引擎负责解析。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: String, // YYYY-MM-DD
    pub purchase_time: String, // HH:MM (24h)
    pub total: String,
    #[serde(default)]
    pub items: Vec<LineItem>,
}
