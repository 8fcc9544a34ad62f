use super::ScoreStore;
use crate::models::ReceiptId;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// 内存积分存储 (重启后丢失)
#[derive(Debug)]
pub struct InMemoryScoreStore {
    next: AtomicU64,
    points: DashMap<ReceiptId, i64>,
}

impl InMemoryScoreStore {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
            points: DashMap::new(),
        }
    }
}

impl Default for InMemoryScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn next_id(&self) -> ReceiptId {
        // 计数器从 1 开始
        ReceiptId::from_counter(self.next.fetch_add(1, Ordering::Relaxed))
    }

    fn put(&self, id: ReceiptId, points: i64) {
        self.points.insert(id, points);
    }

    fn get(&self, id: ReceiptId) -> Option<i64> {
        self.points.get(&id).map(|entry| *entry.value())
    }

    fn len(&self) -> usize {
        self.points.len()
    }
}
