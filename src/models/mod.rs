pub mod receipt;
pub mod result;

pub use receipt::{LineItem, Receipt};
pub use result::{InvalidReceiptId, PointsResponse, ProcessResponse, ReceiptId};
