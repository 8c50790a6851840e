//! High-level client — `UpbitClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the request defaults, and accessor methods.

use crate::domain::candle::client::Candles;
use crate::domain::market::client::Markets;
use crate::domain::orderbook::client::Orderbooks;
use crate::domain::ticker::client::Tickers;
use crate::domain::trade::client::Trades;
use crate::error::SdkError;
use crate::http::{RetryPolicy, UpbitHttp};

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::candle::client::Candles as CandlesClient;
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::orderbook::client::Orderbooks as OrderbooksClient;
pub use crate::domain::ticker::client::Tickers as TickersClient;
pub use crate::domain::trade::client::Trades as TradesClient;

/// The primary entry point for quotation data.
///
/// Provides nested sub-client accessors for each domain:
/// `client.markets()`, `client.tickers()`, etc. Cloning is cheap; clones
/// share the connection pool.
#[derive(Clone)]
pub struct UpbitClient {
    pub(crate) http: UpbitHttp,
    pub(crate) trade_count: u32,
    pub(crate) candle_count: u32,
}

impl UpbitClient {
    pub fn builder() -> UpbitClientBuilder {
        UpbitClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn tickers(&self) -> Tickers<'_> {
        Tickers { client: self }
    }

    pub fn trades(&self) -> Trades<'_> {
        Trades { client: self }
    }

    pub fn orderbooks(&self) -> Orderbooks<'_> {
        Orderbooks { client: self }
    }

    pub fn candles(&self) -> Candles<'_> {
        Candles { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct UpbitClientBuilder {
    base_url: String,
    retry_policy: RetryPolicy,
    timeout: Option<Duration>,
    trade_count: u32,
    candle_count: u32,
}

impl Default for UpbitClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            retry_policy: RetryPolicy::None,
            timeout: None,
            trade_count: crate::network::DEFAULT_TRADE_COUNT,
            candle_count: crate::network::DEFAULT_CANDLE_COUNT,
        }
    }
}

impl UpbitClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Per-request timeout. Requests wait indefinitely when unset.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn trade_count(mut self, count: u32) -> Self {
        self.trade_count = count;
        self
    }

    pub fn candle_count(mut self, count: u32) -> Self {
        self.candle_count = count;
        self
    }

    pub fn build(self) -> Result<UpbitClient, SdkError> {
        // Exchange row caps: 500 trade ticks, 200 candles.
        if self.trade_count == 0 || self.trade_count > 500 {
            return Err(SdkError::Validation(format!(
                "trade_count must be in 1..=500, got {}",
                self.trade_count
            )));
        }
        if self.candle_count == 0 || self.candle_count > 200 {
            return Err(SdkError::Validation(format!(
                "candle_count must be in 1..=200, got {}",
                self.candle_count
            )));
        }

        Ok(UpbitClient {
            http: UpbitHttp::new(&self.base_url, self.retry_policy, self.timeout)?,
            trade_count: self.trade_count,
            candle_count: self.candle_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = UpbitClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(client.trade_count, crate::network::DEFAULT_TRADE_COUNT);
        assert_eq!(client.candle_count, crate::network::DEFAULT_CANDLE_COUNT);
    }

    #[test]
    fn test_builder_overrides() {
        let client = UpbitClient::builder()
            .base_url("http://localhost:8080/v1/")
            .trade_count(10)
            .candle_count(30)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1");
        assert_eq!(client.trade_count, 10);
        assert_eq!(client.candle_count, 30);
    }

    #[test]
    fn test_builder_rejects_out_of_range_counts() {
        assert!(UpbitClient::builder().candle_count(0).build().is_err());
        assert!(UpbitClient::builder().candle_count(201).build().is_err());
        assert!(UpbitClient::builder().trade_count(501).build().is_err());
    }
}
