pub mod direction;
pub mod trade;

pub use direction::*;
pub use trade::{TradeEntry, UNKNOWN_CATEGORY};
