//! Wire types for `GET /candles/{days,weeks,months}` and `GET /candles/minutes/{unit}`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response entry shared by every candle endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleResponse {
    pub market: String,
    pub candle_date_time_utc: String,
    pub candle_date_time_kst: String,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub trade_price: Decimal,
    pub timestamp: i64,
    pub candle_acc_trade_price: Decimal,
    pub candle_acc_trade_volume: Decimal,
    // minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<u8>,
    // weeks, months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_day_of_period: Option<String>,
    // days
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_closing_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_rate: Option<Decimal>,
}
