//! Candle domain — OHLCV buckets for chart rendering.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::MarketCode;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One OHLCV bucket. Minute candles carry `unit`; week and month candles carry
/// `first_day_of_period`; day candles carry the change fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub market: MarketCode,
    pub time: DateTime<Utc>,
    pub time_kst: NaiveDateTime,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub acc_trade_price: Decimal,
    pub acc_trade_volume: Decimal,
    pub last_trade_at: DateTime<Utc>,
    pub unit: Option<u8>,
    pub first_day_of_period: Option<NaiveDate>,
    pub prev_closing_price: Option<Decimal>,
    pub change_price: Option<Decimal>,
    pub change_rate: Option<Decimal>,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }

    /// High-low range.
    pub fn range(&self) -> Decimal {
        self.high - self.low
    }

    /// Absolute open-close body size.
    pub fn body(&self) -> Decimal {
        (self.close - self.open).abs()
    }
}

#[derive(Debug)]
pub enum ValidationError {
    MissingMarketCode,
    InvalidCandleTime(String),
    InvalidPeriodStart(String),
    InvalidTimestamp(i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingMarketCode => write!(f, "Candle: missing market code"),
            ValidationError::InvalidCandleTime(t) => write!(f, "Candle: invalid candle time {t}"),
            ValidationError::InvalidPeriodStart(d) => {
                write!(f, "Candle: invalid first day of period {d}")
            }
            ValidationError::InvalidTimestamp(ts) => write!(f, "Candle: invalid timestamp {ts}"),
        }
    }
}

impl std::error::Error for ValidationError {}
