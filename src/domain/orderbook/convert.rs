//! Conversion: OrderbookResponse → OrderBook.

use super::wire::{OrderbookResponse, OrderbookUnitResponse};
use super::{OrderBook, OrderbookUnit, ValidationError};
use crate::shared::MarketCode;
use chrono::{DateTime, Utc};

impl From<OrderbookUnitResponse> for OrderbookUnit {
    fn from(u: OrderbookUnitResponse) -> Self {
        Self {
            ask_price: u.ask_price,
            bid_price: u.bid_price,
            ask_size: u.ask_size,
            bid_size: u.bid_size,
        }
    }
}

impl TryFrom<OrderbookResponse> for OrderBook {
    type Error = ValidationError;

    fn try_from(source: OrderbookResponse) -> Result<Self, Self::Error> {
        if source.market.trim().is_empty() {
            return Err(ValidationError::MissingMarketCode);
        }
        let timestamp = DateTime::<Utc>::from_timestamp_millis(source.timestamp).ok_or_else(
            || ValidationError::InvalidTimestamp(source.market.clone(), source.timestamp),
        )?;

        Ok(Self {
            market: MarketCode::from(source.market),
            timestamp,
            total_ask_size: source.total_ask_size,
            total_bid_size: source.total_bid_size,
            units: source
                .orderbook_units
                .into_iter()
                .map(OrderbookUnit::from)
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE: &str = r#"{
        "market": "KRW-BTC",
        "timestamp": 1705311000000,
        "total_ask_size": 12.5,
        "total_bid_size": 30.1,
        "orderbook_units": [
            {"ask_price": 58913000, "bid_price": 58912000, "ask_size": 0.5, "bid_size": 1.2},
            {"ask_price": 58914000, "bid_price": 58911000, "ask_size": 0.7, "bid_size": 0.3}
        ],
        "level": 0
    }"#;

    #[test]
    fn test_orderbook_conversion() {
        let resp: OrderbookResponse = serde_json::from_str(SAMPLE).unwrap();
        let ob = OrderBook::try_from(resp).unwrap();
        assert_eq!(ob.market.as_str(), "KRW-BTC");
        assert_eq!(ob.units.len(), 2);
        assert_eq!(ob.total_bid_size, Decimal::from_str("30.1").unwrap());
        assert_eq!(ob.best_ask(), Some(Decimal::from(58_913_000)));
        assert_eq!(ob.best_bid(), Some(Decimal::from(58_912_000)));
        assert_eq!(ob.spread(), Some(Decimal::from(1_000)));
    }

    #[test]
    fn test_orderbook_without_level() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        value.as_object_mut().unwrap().remove("level");
        let resp: OrderbookResponse = serde_json::from_value(value).unwrap();
        assert!(resp.level.is_none());
    }

    #[test]
    fn test_orderbook_rejects_empty_market() {
        let mut resp: OrderbookResponse = serde_json::from_str(SAMPLE).unwrap();
        resp.market.clear();
        assert!(matches!(
            OrderBook::try_from(resp),
            Err(ValidationError::MissingMarketCode)
        ));
    }
}
