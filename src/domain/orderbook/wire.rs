//! Wire types for `GET /orderbook`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response entry for one market's order book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookResponse {
    pub market: String,
    pub timestamp: i64,
    pub total_ask_size: Decimal,
    pub total_bid_size: Decimal,
    pub orderbook_units: Vec<OrderbookUnitResponse>,
    /// Price grouping level; only present on KRW markets.
    #[serde(default)]
    pub level: Option<Decimal>,
}

/// A single depth level as sent by the exchange.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderbookUnitResponse {
    pub ask_price: Decimal,
    pub bid_price: Decimal,
    pub ask_size: Decimal,
    pub bid_size: Decimal,
}
