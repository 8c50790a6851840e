//! Network URL constants and request defaults.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.upbit.com/v1";

/// Number of recent trades requested per trade-list fetch.
pub const DEFAULT_TRADE_COUNT: u32 = 50;

/// Number of candles requested per candle fetch.
pub const DEFAULT_CANDLE_COUNT: u32 = 200;
