//! Conversion: TickerResponse → Ticker.

use super::wire::TickerResponse;
use super::{Ticker, ValidationError};
use crate::shared::MarketCode;
use chrono::{DateTime, Utc};

impl TryFrom<TickerResponse> for Ticker {
    type Error = ValidationError;

    fn try_from(t: TickerResponse) -> Result<Self, Self::Error> {
        if t.market.trim().is_empty() {
            return Err(ValidationError::MissingMarketCode);
        }
        let timestamp = DateTime::<Utc>::from_timestamp_millis(t.timestamp)
            .ok_or(ValidationError::InvalidTimestamp(t.timestamp))?;

        Ok(Self {
            market: MarketCode::from(t.market),
            trade_price: t.trade_price,
            opening_price: t.opening_price,
            high_price: t.high_price,
            low_price: t.low_price,
            prev_closing_price: t.prev_closing_price,
            change: t.change,
            change_price: t.change_price,
            change_rate: t.change_rate,
            signed_change_price: t.signed_change_price,
            signed_change_rate: t.signed_change_rate,
            trade_volume: t.trade_volume,
            acc_trade_price_24h: t.acc_trade_price_24h,
            acc_trade_volume_24h: t.acc_trade_volume_24h,
            highest_52_week_price: t.highest_52_week_price,
            lowest_52_week_price: t.lowest_52_week_price,
            timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::Change;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const SAMPLE: &str = r#"{
        "market": "KRW-BTC",
        "trade_date": "20240115",
        "trade_time": "093000",
        "trade_date_kst": "20240115",
        "trade_time_kst": "183000",
        "trade_timestamp": 1705311000000,
        "opening_price": 58000000,
        "high_price": 59000000,
        "low_price": 57500000,
        "trade_price": 58912000,
        "prev_closing_price": 58000000,
        "change": "RISE",
        "change_price": 912000,
        "change_rate": 0.0157241379,
        "signed_change_price": 912000,
        "signed_change_rate": 0.0157241379,
        "trade_volume": 0.0012,
        "acc_trade_price": 123456789012.5,
        "acc_trade_price_24h": 234567890123.4,
        "acc_trade_volume": 2100.5,
        "acc_trade_volume_24h": 4000.1,
        "highest_52_week_price": 100000000,
        "highest_52_week_date": "2024-03-14",
        "lowest_52_week_price": 30000000,
        "lowest_52_week_date": "2023-06-15",
        "timestamp": 1705311001000
    }"#;

    #[test]
    fn test_ticker_response_conversion() {
        let resp: TickerResponse = serde_json::from_str(SAMPLE).unwrap();
        let ticker = Ticker::try_from(resp).unwrap();
        assert_eq!(ticker.market.as_str(), "KRW-BTC");
        assert_eq!(ticker.trade_price, Decimal::from(58_912_000));
        assert_eq!(ticker.change, Change::Rise);
        assert_eq!(ticker.trade_volume, Decimal::from_str("0.0012").unwrap());
        assert_eq!(ticker.day_range(), Decimal::from(1_500_000));
        assert_eq!(ticker.timestamp.timestamp_millis(), 1705311001000);
    }

    #[test]
    fn test_ticker_without_52_week_fields() {
        let mut value: serde_json::Value = serde_json::from_str(SAMPLE).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("highest_52_week_price");
        obj.remove("lowest_52_week_price");
        let resp: TickerResponse = serde_json::from_value(value).unwrap();
        let ticker = Ticker::try_from(resp).unwrap();
        assert!(ticker.highest_52_week_price.is_none());
        assert!(ticker.lowest_52_week_price.is_none());
    }

    #[test]
    fn test_ticker_rejects_empty_market() {
        let mut resp: TickerResponse = serde_json::from_str(SAMPLE).unwrap();
        resp.market = " ".to_string();
        assert!(matches!(
            Ticker::try_from(resp),
            Err(ValidationError::MissingMarketCode)
        ));
    }
}
