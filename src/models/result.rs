use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 小票ID (从 1 开始递增)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ReceiptId(u64);

impl ReceiptId {
    /// 0 不是合法ID
    pub fn new(raw: u64) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub(crate) fn from_counter(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl TryFrom<u64> for ReceiptId {
    type Error = InvalidReceiptId;

    fn try_from(raw: u64) -> Result<Self, Self::Error> {
        ReceiptId::new(raw).ok_or_else(|| InvalidReceiptId(raw.to_string()))
    }
}

impl From<ReceiptId> for u64 {
    fn from(id: ReceiptId) -> Self {
        id.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid receipt id: {0:?}")]
pub struct InvalidReceiptId(pub String);

impl FromStr for ReceiptId {
    type Err = InvalidReceiptId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .ok()
            .and_then(ReceiptId::new)
            .ok_or_else(|| InvalidReceiptId(s.to_string()))
    }
}

/// POST /receipts/process 响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(rename = "ID")]
    pub id: ReceiptId,
}

/// GET /receipts/{id}/points 响应体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: i64,
}
