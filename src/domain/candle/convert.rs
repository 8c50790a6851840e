//! Conversion: CandleResponse → Candle (TryFrom + validation).

use super::wire::CandleResponse;
use super::{Candle, ValidationError};
use crate::shared::serde_util::naive_time;
use crate::shared::MarketCode;
use chrono::{DateTime, NaiveDate, Utc};

impl TryFrom<CandleResponse> for Candle {
    type Error = ValidationError;

    fn try_from(c: CandleResponse) -> Result<Self, Self::Error> {
        if c.market.trim().is_empty() {
            return Err(ValidationError::MissingMarketCode);
        }

        let time = naive_time::parse(&c.candle_date_time_utc)
            .ok_or_else(|| ValidationError::InvalidCandleTime(c.candle_date_time_utc.clone()))?
            .and_utc();
        let time_kst = naive_time::parse(&c.candle_date_time_kst)
            .ok_or_else(|| ValidationError::InvalidCandleTime(c.candle_date_time_kst.clone()))?;
        let last_trade_at = DateTime::<Utc>::from_timestamp_millis(c.timestamp)
            .ok_or(ValidationError::InvalidTimestamp(c.timestamp))?;

        let first_day_of_period = match c.first_day_of_period {
            Some(d) => Some(
                NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                    .map_err(|_| ValidationError::InvalidPeriodStart(d.clone()))?,
            ),
            None => None,
        };

        Ok(Self {
            market: MarketCode::from(c.market),
            time,
            time_kst,
            open: c.opening_price,
            high: c.high_price,
            low: c.low_price,
            close: c.trade_price,
            acc_trade_price: c.candle_acc_trade_price,
            acc_trade_volume: c.candle_acc_trade_volume,
            last_trade_at,
            unit: c.unit,
            first_day_of_period,
            prev_closing_price: c.prev_closing_price,
            change_price: c.change_price,
            change_rate: c.change_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rust_decimal::Decimal;

    fn day_candle() -> CandleResponse {
        serde_json::from_str(
            r#"{
                "market": "KRW-BTC",
                "candle_date_time_utc": "2024-01-15T00:00:00",
                "candle_date_time_kst": "2024-01-15T09:00:00",
                "opening_price": 58000000,
                "high_price": 59000000,
                "low_price": 57500000,
                "trade_price": 58912000,
                "timestamp": 1705363199999,
                "candle_acc_trade_price": 123456789.1,
                "candle_acc_trade_volume": 2.1,
                "prev_closing_price": 58000000,
                "change_price": 912000,
                "change_rate": 0.0157
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_day_candle_conversion() {
        let candle = Candle::try_from(day_candle()).unwrap();
        assert_eq!(candle.market.as_str(), "KRW-BTC");
        assert_eq!(candle.time.day(), 15);
        assert_eq!(candle.time.hour(), 0);
        assert_eq!(candle.time_kst.hour(), 9);
        assert_eq!(candle.close, Decimal::from(58_912_000));
        assert!(candle.is_bullish());
        assert_eq!(candle.range(), Decimal::from(1_500_000));
        assert_eq!(candle.body(), Decimal::from(912_000));
        assert_eq!(candle.change_price, Some(Decimal::from(912_000)));
        assert!(candle.unit.is_none());
    }

    #[test]
    fn test_minute_candle_carries_unit() {
        let mut resp = day_candle();
        resp.unit = Some(5);
        resp.prev_closing_price = None;
        resp.change_price = None;
        resp.change_rate = None;
        let candle = Candle::try_from(resp).unwrap();
        assert_eq!(candle.unit, Some(5));
        assert!(candle.change_rate.is_none());
    }

    #[test]
    fn test_week_candle_period_start() {
        let mut resp = day_candle();
        resp.first_day_of_period = Some("2024-01-15".to_string());
        let candle = Candle::try_from(resp).unwrap();
        assert_eq!(
            candle.first_day_of_period,
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_rejects_bad_time() {
        let mut resp = day_candle();
        resp.candle_date_time_utc = "15/01/2024".to_string();
        assert!(matches!(
            Candle::try_from(resp),
            Err(ValidationError::InvalidCandleTime(_))
        ));
    }

    #[test]
    fn test_close_above_high_is_kept() {
        let mut resp = day_candle();
        resp.trade_price = Decimal::from(60_000_000);
        let candle = Candle::try_from(resp).unwrap();
        assert_eq!(candle.close, Decimal::from(60_000_000));
        assert_eq!(candle.high, Decimal::from(59_000_000));
    }
}
