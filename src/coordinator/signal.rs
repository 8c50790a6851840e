//! Lifecycle signals published to application state.

use crate::domain::candle::Candle;
use crate::domain::market::MarketInfo;
use crate::domain::orderbook::OrderBook;
use crate::domain::ticker::Ticker;
use crate::domain::trade::Trade;
use crate::error::SdkError;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Phase of one fetch.
#[derive(Debug, Clone)]
pub enum Lifecycle<T> {
    Requested,
    Succeeded(T),
    Failed { error: Arc<SdkError> },
}

impl<T> Lifecycle<T> {
    pub fn phase(&self) -> Phase {
        match self {
            Lifecycle::Requested => Phase::Requested,
            Lifecycle::Succeeded(_) => Phase::Succeeded,
            Lifecycle::Failed { .. } => Phase::Failed,
        }
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Lifecycle::Succeeded(v) => Some(v),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&Arc<SdkError>> {
        match self {
            Lifecycle::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Payload-free view of a [`Lifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Requested,
    Succeeded,
    Failed,
}

/// Which dataset a lifecycle belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchKind {
    MarketList,
    SelectedCoin,
    TickerList,
    TradeList,
    Orderbook,
    CandleData,
}

impl FetchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchKind::MarketList => "market_list",
            FetchKind::SelectedCoin => "selected_coin",
            FetchKind::TickerList => "ticker_list",
            FetchKind::TradeList => "trade_list",
            FetchKind::Orderbook => "orderbook",
            FetchKind::CandleData => "candle_data",
        }
    }
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything the coordinator publishes.
#[derive(Debug, Clone)]
pub enum Signal {
    MarketList(Lifecycle<Vec<MarketInfo>>),
    SelectedCoin(Lifecycle<Vec<Ticker>>),
    TickerList(Lifecycle<Vec<Ticker>>),
    TradeList(Lifecycle<Vec<Trade>>),
    Orderbook(Lifecycle<Vec<OrderBook>>),
    CandleData(Lifecycle<Vec<Candle>>),
    MarketNameChanged { market_name: String },
}

impl Signal {
    /// `None` for `MarketNameChanged`, which has no lifecycle.
    pub fn kind(&self) -> Option<FetchKind> {
        match self {
            Signal::MarketList(_) => Some(FetchKind::MarketList),
            Signal::SelectedCoin(_) => Some(FetchKind::SelectedCoin),
            Signal::TickerList(_) => Some(FetchKind::TickerList),
            Signal::TradeList(_) => Some(FetchKind::TradeList),
            Signal::Orderbook(_) => Some(FetchKind::Orderbook),
            Signal::CandleData(_) => Some(FetchKind::CandleData),
            Signal::MarketNameChanged { .. } => None,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self {
            Signal::MarketList(l) => Some(l.phase()),
            Signal::SelectedCoin(l) => Some(l.phase()),
            Signal::TickerList(l) => Some(l.phase()),
            Signal::TradeList(l) => Some(l.phase()),
            Signal::Orderbook(l) => Some(l.phase()),
            Signal::CandleData(l) => Some(l.phase()),
            Signal::MarketNameChanged { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&Arc<SdkError>> {
        match self {
            Signal::MarketList(l) => l.error(),
            Signal::SelectedCoin(l) => l.error(),
            Signal::TickerList(l) => l.error(),
            Signal::TradeList(l) => l.error(),
            Signal::Orderbook(l) => l.error(),
            Signal::CandleData(l) => l.error(),
            Signal::MarketNameChanged { .. } => None,
        }
    }
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

/// Sink for signals. Called synchronously from handler tasks.
pub trait Dispatch: Send + Sync {
    fn dispatch(&self, signal: Signal);
}

impl Dispatch for mpsc::UnboundedSender<Signal> {
    fn dispatch(&self, signal: Signal) {
        if self.send(signal).is_err() {
            tracing::warn!("signal receiver dropped; signal discarded");
        }
    }
}

/// Fans each signal out to several sinks, in order.
#[derive(Clone, Default)]
pub struct Broadcast {
    sinks: Vec<Arc<dyn Dispatch>>,
}

impl Broadcast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: Arc<dyn Dispatch>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl Dispatch for Broadcast {
    fn dispatch(&self, signal: Signal) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.dispatch(signal.clone());
            }
            last.dispatch(signal);
        }
    }
}
