//! Fetch contract the coordinator drives.

use crate::domain::candle::Candle;
use crate::domain::market::MarketInfo;
use crate::domain::orderbook::OrderBook;
use crate::domain::ticker::Ticker;
use crate::domain::trade::Trade;
use crate::error::SdkError;
use crate::shared::{DateUnit, MarketCode, MinuteUnit};
use async_trait::async_trait;

#[cfg(feature = "http")]
use crate::client::UpbitClient;

/// One async call per endpoint. Implemented by `UpbitClient`; tests swap in
/// an in-memory implementation.
#[async_trait]
pub trait MarketDataApi: Send + Sync {
    async fn market_all(&self) -> Result<Vec<MarketInfo>, SdkError>;

    async fn present_price(&self, codes: &[MarketCode]) -> Result<Vec<Ticker>, SdkError>;

    async fn trades(&self, code: &MarketCode) -> Result<Vec<Trade>, SdkError>;

    async fn order_books(&self, codes: &[MarketCode]) -> Result<Vec<OrderBook>, SdkError>;

    async fn candles_by_date(
        &self,
        code: &MarketCode,
        unit: DateUnit,
    ) -> Result<Vec<Candle>, SdkError>;

    async fn candles_by_minutes(
        &self,
        code: &MarketCode,
        unit: MinuteUnit,
    ) -> Result<Vec<Candle>, SdkError>;
}

#[cfg(feature = "http")]
#[async_trait]
impl MarketDataApi for UpbitClient {
    async fn market_all(&self) -> Result<Vec<MarketInfo>, SdkError> {
        self.markets().all().await
    }

    async fn present_price(&self, codes: &[MarketCode]) -> Result<Vec<Ticker>, SdkError> {
        self.tickers().get(codes).await
    }

    async fn trades(&self, code: &MarketCode) -> Result<Vec<Trade>, SdkError> {
        // Inherent `trades()` accessor, not this method.
        UpbitClient::trades(self).recent(code, None).await
    }

    async fn order_books(&self, codes: &[MarketCode]) -> Result<Vec<OrderBook>, SdkError> {
        self.orderbooks().get(codes).await
    }

    async fn candles_by_date(
        &self,
        code: &MarketCode,
        unit: DateUnit,
    ) -> Result<Vec<Candle>, SdkError> {
        self.candles().by_date(code, unit).await
    }

    async fn candles_by_minutes(
        &self,
        code: &MarketCode,
        unit: MinuteUnit,
    ) -> Result<Vec<Candle>, SdkError> {
        self.candles().by_minutes(code, unit).await
    }
}
