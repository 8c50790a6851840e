//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the exchange sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod serde_util;

use crate::error::SdkError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── MarketCode ──────────────────────────────────────────────────────────────

/// Newtype for market codes (e.g. `"KRW-BTC"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarketCode(String);

impl MarketCode {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Quote currency prefix (`"KRW"` for `"KRW-BTC"`).
    pub fn quote(&self) -> &str {
        self.0.split_once('-').map(|(q, _)| q).unwrap_or(&self.0)
    }

    /// Base asset suffix (`"BTC"` for `"KRW-BTC"`).
    pub fn base(&self) -> &str {
        self.0.split_once('-').map(|(_, b)| b).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for MarketCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for MarketCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MarketCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for MarketCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MarketCode(s.to_string()))
    }
}

impl Serialize for MarketCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MarketCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MarketCode(s))
    }
}

// ─── AskBid ──────────────────────────────────────────────────────────────────

/// Taker side of an executed trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AskBid {
    Ask,
    Bid,
}

impl std::fmt::Display for AskBid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AskBid::Ask => f.pad("Sell"),
            AskBid::Bid => f.pad("Buy"),
        }
    }
}

// ─── Change ──────────────────────────────────────────────────────────────────

/// Direction of the price move against the previous close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Change {
    Rise,
    #[default]
    Even,
    Fall,
}

impl Change {
    pub fn sign(&self) -> &'static str {
        match self {
            Change::Rise => "+",
            Change::Even => "",
            Change::Fall => "-",
        }
    }
}

// ─── Candle intervals ────────────────────────────────────────────────────────

/// Calendar bucket for date-based candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateUnit {
    Days,
    Weeks,
    Months,
}

impl DateUnit {
    /// Path segment under `/candles/`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }
}

impl std::fmt::Display for DateUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Minute multiple for minute candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MinuteUnit {
    One,
    Five,
    Ten,
}

impl MinuteUnit {
    pub fn minutes(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Five => 5,
            Self::Ten => 10,
        }
    }
}

impl std::fmt::Display for MinuteUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.minutes())
    }
}

/// Candle interval selectable from the chart toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleType {
    #[default]
    #[serde(rename = "days")]
    Days,
    #[serde(rename = "weeks")]
    Weeks,
    #[serde(rename = "months")]
    Months,
    #[serde(rename = "1minutes")]
    Minute1,
    #[serde(rename = "5minutes")]
    Minute5,
    #[serde(rename = "10minutes")]
    Minute10,
}

/// Which fetch a candle interval resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandleRequest {
    ByDate(DateUnit),
    ByMinutes(MinuteUnit),
}

impl CandleType {
    pub const ALL: [CandleType; 6] = [
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Minute1,
        Self::Minute5,
        Self::Minute10,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Minute1 => "1minutes",
            Self::Minute5 => "5minutes",
            Self::Minute10 => "10minutes",
        }
    }

    pub fn request(&self) -> CandleRequest {
        match self {
            Self::Days => CandleRequest::ByDate(DateUnit::Days),
            Self::Weeks => CandleRequest::ByDate(DateUnit::Weeks),
            Self::Months => CandleRequest::ByDate(DateUnit::Months),
            Self::Minute1 => CandleRequest::ByMinutes(MinuteUnit::One),
            Self::Minute5 => CandleRequest::ByMinutes(MinuteUnit::Five),
            Self::Minute10 => CandleRequest::ByMinutes(MinuteUnit::Ten),
        }
    }
}

impl FromStr for CandleType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SdkError::UnknownCandleType(s.to_string()))
    }
}

impl std::fmt::Display for CandleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_code_parts() {
        let code = MarketCode::from("KRW-BTC");
        assert_eq!(code.quote(), "KRW");
        assert_eq!(code.base(), "BTC");

        let bare = MarketCode::from("BTC");
        assert_eq!(bare.quote(), "BTC");
        assert_eq!(bare.base(), "");
    }

    #[test]
    fn test_market_code_serde() {
        let code = MarketCode::from("KRW-ETH");
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"KRW-ETH\"");
        let back: MarketCode = serde_json::from_str(&json).unwrap();
        assert_eq!(code, back);
    }

    #[test]
    fn test_ask_bid_and_change_serde() {
        let ask: AskBid = serde_json::from_str("\"ASK\"").unwrap();
        assert_eq!(ask, AskBid::Ask);
        let fall: Change = serde_json::from_str("\"FALL\"").unwrap();
        assert_eq!(fall, Change::Fall);
        assert_eq!(fall.sign(), "-");
    }

    #[test]
    fn test_candle_type_parses_every_tag() {
        for t in CandleType::ALL {
            assert_eq!(t.as_str().parse::<CandleType>().unwrap(), t);
        }
    }

    #[test]
    fn test_candle_type_rejects_unknown_tag() {
        let err = "3minutes".parse::<CandleType>().unwrap_err();
        assert!(matches!(err, SdkError::UnknownCandleType(ref t) if t == "3minutes"));
        assert!(err.to_string().contains("3minutes"));
    }

    #[test]
    fn test_candle_type_resolution() {
        assert_eq!(CandleType::Weeks.request(), CandleRequest::ByDate(DateUnit::Weeks));
        assert_eq!(
            CandleType::Minute10.request(),
            CandleRequest::ByMinutes(MinuteUnit::Ten)
        );
        assert_eq!(MinuteUnit::Five.minutes(), 5);
    }

    #[test]
    fn test_candle_type_serde() {
        let t: CandleType = serde_json::from_str("\"5minutes\"").unwrap();
        assert_eq!(t, CandleType::Minute5);
        assert_eq!(serde_json::to_string(&CandleType::Months).unwrap(), "\"months\"");
    }
}
