//! Conversion: TradeResponse → Trade.

use super::wire::TradeResponse;
use super::{Trade, ValidationError};
use crate::shared::MarketCode;
use chrono::{DateTime, Utc};

impl TryFrom<TradeResponse> for Trade {
    type Error = ValidationError;

    fn try_from(t: TradeResponse) -> Result<Self, Self::Error> {
        if t.market.trim().is_empty() {
            return Err(ValidationError::MissingMarketCode);
        }
        let timestamp = DateTime::<Utc>::from_timestamp_millis(t.timestamp)
            .ok_or(ValidationError::InvalidTimestamp(t.sequential_id, t.timestamp))?;

        Ok(Self {
            market: MarketCode::from(t.market),
            sequential_id: t.sequential_id,
            timestamp,
            price: t.trade_price,
            volume: t.trade_volume,
            prev_closing_price: t.prev_closing_price,
            change_price: t.change_price,
            side: t.ask_bid,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::AskBid;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_trade_response() -> TradeResponse {
        serde_json::from_str(
            r#"{
                "market": "KRW-BTC",
                "trade_date_utc": "2024-01-15",
                "trade_time_utc": "09:30:00",
                "timestamp": 1705311000000,
                "trade_price": 58912000,
                "trade_volume": 0.01,
                "prev_closing_price": 58000000,
                "change_price": 912000,
                "ask_bid": "BID",
                "sequential_id": 17053110000000000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_trade_response_conversion() {
        let trade = Trade::try_from(sample_trade_response()).unwrap();
        assert_eq!(trade.market.as_str(), "KRW-BTC");
        assert_eq!(trade.sequential_id, 17053110000000000);
        assert_eq!(trade.price, Decimal::from(58_912_000));
        assert_eq!(trade.volume, Decimal::from_str("0.01").unwrap());
        assert_eq!(trade.side, AskBid::Bid);
        assert_eq!(trade.timestamp.timestamp_millis(), 1705311000000);
    }

    #[test]
    fn test_empty_market_rejected() {
        let mut resp = sample_trade_response();
        resp.market = " ".to_string();
        assert!(matches!(
            Trade::try_from(resp),
            Err(ValidationError::MissingMarketCode)
        ));
    }

    #[test]
    fn test_notional() {
        let trade = Trade::try_from(sample_trade_response()).unwrap();
        assert_eq!(trade.notional(), Decimal::from(589_120));
    }
}
