pub mod memory;

pub use memory::InMemoryScoreStore;

use crate::models::ReceiptId;

/// 积分存储抽象
///
/// 实现必须可在多个请求间并发共享，ID 不可重复分配。
pub trait ScoreStore: Send + Sync {
    /// 分配一个新的小票ID
    fn next_id(&self) -> ReceiptId;

    fn put(&self, id: ReceiptId, points: i64);

    fn get(&self, id: ReceiptId) -> Option<i64>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
