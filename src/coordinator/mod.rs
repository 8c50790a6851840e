//! Market-data coordinator — turns user triggers into tracked fetches.
//!
//! Every fetch publishes `Requested`, then exactly one of `Succeeded` or
//! `Failed`. Errors never escape a handler; they are logged and published.

pub mod api;
pub mod event;
pub mod signal;
pub mod watcher;

pub use api::MarketDataApi;
pub use event::{TriggerEvent, TriggerKind};
pub use signal::{Broadcast, Dispatch, FetchKind, Lifecycle, Phase, Signal};
pub use watcher::{StateReader, TriggerPolicy, Watcher};

use crate::error::SdkError;
use crate::shared::{CandleRequest, CandleType, DateUnit, MarketCode};
use std::future::Future;
use std::sync::Arc;

/// Issues fetches against a [`MarketDataApi`] and reports each one through a
/// [`Dispatch`] sink.
#[derive(Clone)]
pub struct MarketDataCoordinator {
    api: Arc<dyn MarketDataApi>,
    dispatch: Arc<dyn Dispatch>,
}

impl MarketDataCoordinator {
    pub fn new(api: Arc<dyn MarketDataApi>, dispatch: Arc<dyn Dispatch>) -> Self {
        Self { api, dispatch }
    }

    // ── Single fetches ───────────────────────────────────────────────────

    pub async fn load_market_list(&self) {
        self.track(Signal::MarketList, self.api.market_all()).await
    }

    /// Present price of one coin, published as a one-element list.
    pub async fn load_selected_coin(&self, code: &MarketCode) {
        let codes = [code.clone()];
        self.track(Signal::SelectedCoin, self.api.present_price(&codes))
            .await
    }

    pub async fn load_ticker_list(&self, codes: &[MarketCode]) {
        self.track(Signal::TickerList, self.api.present_price(codes))
            .await
    }

    pub async fn load_trade_list(&self, code: &MarketCode) {
        self.track(Signal::TradeList, self.api.trades(code)).await
    }

    pub async fn load_orderbook(&self, codes: &[MarketCode]) {
        self.track(Signal::Orderbook, self.api.order_books(codes))
            .await
    }

    /// Daily candles, the chart's default interval.
    pub async fn load_candle_data(&self, code: &MarketCode) {
        self.track(
            Signal::CandleData,
            self.api.candles_by_date(code, DateUnit::Days),
        )
        .await
    }

    // ── Trigger handlers ─────────────────────────────────────────────────

    /// Reload the chart for `code` at the interval named by `tag`.
    ///
    /// `code` is the selection snapshot taken when the trigger was
    /// dispatched. An unknown tag or a missing selection fails without
    /// calling the API.
    pub async fn change_candle_data(&self, code: Option<MarketCode>, tag: &str) {
        let api = &self.api;
        let fetch = async move {
            let ty: CandleType = tag.parse()?;
            let code = code.ok_or(SdkError::NoSelectedCoin)?;
            match ty.request() {
                CandleRequest::ByDate(unit) => api.candles_by_date(&code, unit).await,
                CandleRequest::ByMinutes(unit) => api.candles_by_minutes(&code, unit).await,
            }
        };
        self.track(Signal::CandleData, fetch).await
    }

    /// Load everything the detail pane shows for a newly selected coin.
    ///
    /// Steps run one after another; the market name is published last and
    /// unconditionally.
    pub async fn change_selected_coin(&self, market_name: &str, code: &MarketCode) {
        self.load_selected_coin(code).await;
        self.load_trade_list(code).await;
        self.load_orderbook(std::slice::from_ref(code)).await;
        self.load_candle_data(code).await;
        self.dispatch.dispatch(Signal::MarketNameChanged {
            market_name: market_name.to_string(),
        });
    }

    // ── Internal ─────────────────────────────────────────────────────────

    async fn track<T, F>(&self, wrap: fn(Lifecycle<T>) -> Signal, fetch: F)
    where
        F: Future<Output = Result<T, SdkError>>,
    {
        let requested = wrap(Lifecycle::Requested);
        let kind = requested.kind().map(|k| k.as_str()).unwrap_or_default();
        self.dispatch.dispatch(requested);

        match fetch.await {
            Ok(payload) => self.dispatch.dispatch(wrap(Lifecycle::Succeeded(payload))),
            Err(error) => {
                tracing::error!(kind, error = %error, "fetch failed");
                self.dispatch.dispatch(wrap(Lifecycle::Failed {
                    error: Arc::new(error),
                }));
            }
        }
    }
}
