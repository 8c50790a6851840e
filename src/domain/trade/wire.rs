//! Wire types for `GET /trades/ticks`.

use crate::shared::AskBid;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response entry for a single trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeResponse {
    pub market: String,
    pub trade_date_utc: String,
    pub trade_time_utc: String,
    pub timestamp: i64,
    pub trade_price: Decimal,
    pub trade_volume: Decimal,
    pub prev_closing_price: Decimal,
    pub change_price: Decimal,
    pub ask_bid: AskBid,
    pub sequential_id: u64,
}
