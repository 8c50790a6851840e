//! Ticker domain — present price snapshots.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::{Change, MarketCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Present price snapshot for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub market: MarketCode,
    pub trade_price: Decimal,
    pub opening_price: Decimal,
    pub high_price: Decimal,
    pub low_price: Decimal,
    pub prev_closing_price: Decimal,
    pub change: Change,
    pub change_price: Decimal,
    pub change_rate: Decimal,
    pub signed_change_price: Decimal,
    pub signed_change_rate: Decimal,
    pub trade_volume: Decimal,
    pub acc_trade_price_24h: Decimal,
    pub acc_trade_volume_24h: Decimal,
    pub highest_52_week_price: Option<Decimal>,
    pub lowest_52_week_price: Option<Decimal>,
    pub timestamp: DateTime<Utc>,
}

impl Ticker {
    /// Intraday range as `high - low`.
    pub fn day_range(&self) -> Decimal {
        self.high_price - self.low_price
    }
}

#[derive(Debug)]
pub enum ValidationError {
    MissingMarketCode,
    InvalidTimestamp(i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingMarketCode => write!(f, "Ticker: missing market code"),
            ValidationError::InvalidTimestamp(ts) => write!(f, "Ticker: invalid timestamp {ts}"),
        }
    }
}

impl std::error::Error for ValidationError {}
