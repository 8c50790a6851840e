//! Trade domain — executed trade records and history.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

use crate::shared::{AskBid, MarketCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use state::TradeHistory;

/// An executed trade.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trade {
    pub market: MarketCode,
    pub sequential_id: u64,
    pub timestamp: DateTime<Utc>,
    pub price: Decimal,
    pub volume: Decimal,
    pub prev_closing_price: Decimal,
    pub change_price: Decimal,
    pub side: AskBid,
}

impl Trade {
    /// Quote-currency value of the fill.
    pub fn notional(&self) -> Decimal {
        self.price * self.volume
    }
}

#[derive(Debug)]
pub enum ValidationError {
    MissingMarketCode,
    InvalidTimestamp(u64, i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingMarketCode => write!(f, "Trade: missing market code"),
            ValidationError::InvalidTimestamp(id, ts) => {
                write!(f, "Trade {id}: invalid timestamp {ts}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
