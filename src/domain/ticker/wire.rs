//! Wire types for `GET /ticker`.

use crate::shared::Change;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response entry for one market's present price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TickerResponse {
    pub market: String,
    #[serde(default)]
    pub trade_date: Option<String>,
    #[serde(default)]
    pub trade_time: Option<String>,
    #[serde(default)]
    pub trade_timestamp: Option<i64>,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub trade_price: Decimal,
    pub prev_closing_price: Decimal,
    pub change: Change,
    pub change_price: Decimal,
    pub change_rate: Decimal,
    pub signed_change_price: Decimal,
    pub signed_change_rate: Decimal,
    pub trade_volume: Decimal,
    pub acc_trade_price: Decimal,
    pub acc_trade_price_24h: Decimal,
    pub acc_trade_volume: Decimal,
    pub acc_trade_volume_24h: Decimal,
    #[serde(default)]
    pub highest_52_week_price: Option<Decimal>,
    #[serde(default)]
    pub highest_52_week_date: Option<String>,
    #[serde(default)]
    pub lowest_52_week_price: Option<Decimal>,
    #[serde(default)]
    pub lowest_52_week_date: Option<String>,
    pub timestamp: i64,
}
