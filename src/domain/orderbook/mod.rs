//! Orderbook domain — per-market depth snapshots.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::MarketCode;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One depth level pairing an ask and a bid at the same rank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderbookUnit {
    pub ask_price: Decimal,
    pub bid_price: Decimal,
    pub ask_size: Decimal,
    pub bid_size: Decimal,
}

/// Order book snapshot for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBook {
    pub market: MarketCode,
    pub timestamp: DateTime<Utc>,
    pub total_ask_size: Decimal,
    pub total_bid_size: Decimal,
    pub units: Vec<OrderbookUnit>,
}

impl OrderBook {
    /// Ask levels keyed by price, ascending. Empty levels are skipped.
    pub fn asks(&self) -> BTreeMap<Decimal, Decimal> {
        self.units
            .iter()
            .filter(|u| !u.ask_size.is_zero())
            .map(|u| (u.ask_price, u.ask_size))
            .collect()
    }

    /// Bid levels keyed by price, ascending. Empty levels are skipped.
    pub fn bids(&self) -> BTreeMap<Decimal, Decimal> {
        self.units
            .iter()
            .filter(|u| !u.bid_size.is_zero())
            .map(|u| (u.bid_price, u.bid_size))
            .collect()
    }

    /// Lowest ask price.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks().keys().next().copied()
    }

    /// Highest bid price.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids().keys().next_back().copied()
    }

    /// Mid price (average of best bid and best ask).
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some((bid + ask) / Decimal::from(2)),
            _ => None,
        }
    }

    /// Spread between best ask and best bid.
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid(), self.best_ask()) {
            (Some(bid), Some(ask)) => Some(ask - bid),
            _ => None,
        }
    }

    /// Share of resting size on the bid side, in `[0, 1]`.
    pub fn bid_ratio(&self) -> Option<Decimal> {
        let total = self.total_ask_size + self.total_bid_size;
        if total.is_zero() {
            return None;
        }
        Some(self.total_bid_size / total)
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[derive(Debug)]
pub enum ValidationError {
    MissingMarketCode,
    InvalidTimestamp(String, i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingMarketCode => write!(f, "OrderBook: missing market code"),
            ValidationError::InvalidTimestamp(m, ts) => {
                write!(f, "OrderBook ({m}): invalid timestamp {ts}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(ask: i64, bid: i64, ask_size: i64, bid_size: i64) -> OrderbookUnit {
        OrderbookUnit {
            ask_price: Decimal::from(ask),
            bid_price: Decimal::from(bid),
            ask_size: Decimal::from(ask_size),
            bid_size: Decimal::from(bid_size),
        }
    }

    fn book(units: Vec<OrderbookUnit>) -> OrderBook {
        OrderBook {
            market: MarketCode::from("KRW-BTC"),
            timestamp: Utc::now(),
            total_ask_size: units.iter().map(|u| u.ask_size).sum(),
            total_bid_size: units.iter().map(|u| u.bid_size).sum(),
            units,
        }
    }

    #[test]
    fn test_best_levels_and_spread() {
        let ob = book(vec![unit(101, 99, 1, 2), unit(102, 98, 3, 4)]);
        assert_eq!(ob.best_ask(), Some(Decimal::from(101)));
        assert_eq!(ob.best_bid(), Some(Decimal::from(99)));
        assert_eq!(ob.spread(), Some(Decimal::from(2)));
        assert_eq!(ob.mid_price(), Some(Decimal::from(100)));
    }

    #[test]
    fn test_zero_size_levels_are_skipped() {
        let ob = book(vec![unit(101, 99, 0, 0), unit(102, 98, 3, 4)]);
        assert_eq!(ob.best_ask(), Some(Decimal::from(102)));
        assert_eq!(ob.best_bid(), Some(Decimal::from(98)));
        assert_eq!(ob.asks().len(), 1);
    }

    #[test]
    fn test_empty_book() {
        let ob = book(vec![]);
        assert!(ob.is_empty());
        assert_eq!(ob.mid_price(), None);
        assert_eq!(ob.bid_ratio(), None);
    }

    #[test]
    fn test_bid_ratio() {
        let ob = book(vec![unit(101, 99, 1, 3)]);
        assert_eq!(ob.bid_ratio(), Some(Decimal::new(75, 2)));
    }
}
