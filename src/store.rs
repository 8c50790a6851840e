//! Application state fed by coordinator signals.
//!
//! `CoinState` is a plain reducer; `CoinStore` puts it behind a lock so the
//! coordinator can publish into it and the watcher can read the selection.

use crate::coordinator::{Dispatch, Lifecycle, Signal, StateReader};
use crate::domain::candle::Candle;
use crate::domain::market::MarketInfo;
use crate::domain::orderbook::OrderBook;
use crate::domain::ticker::Ticker;
use crate::domain::trade::TradeHistory;
use crate::error::SdkError;
use crate::shared::MarketCode;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One dataset plus its fetch status.
#[derive(Debug, Clone, Default)]
pub struct Loadable<T> {
    pub loading: bool,
    pub data: T,
    pub error: Option<Arc<SdkError>>,
}

impl<T> Loadable<T> {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fail(&mut self, error: &Arc<SdkError>) {
        self.loading = false;
        self.error = Some(Arc::clone(error));
    }

    fn finish(&mut self, data: T) {
        self.loading = false;
        self.data = data;
    }
}

impl<T: Clone> Loadable<T> {
    fn apply(&mut self, lifecycle: &Lifecycle<T>) {
        match lifecycle {
            Lifecycle::Requested => self.begin(),
            Lifecycle::Succeeded(v) => self.finish(v.clone()),
            Lifecycle::Failed { error } => self.fail(error),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CoinState {
    pub market_list: Loadable<Vec<MarketInfo>>,
    pub selected: Loadable<Vec<Ticker>>,
    pub ticker_list: Loadable<Vec<Ticker>>,
    pub trade_list: Loadable<TradeHistory>,
    pub orderbook: Loadable<Vec<OrderBook>>,
    pub candle_data: Loadable<Vec<Candle>>,
    pub selected_coin: Option<Ticker>,
    pub market_name: String,
}

impl CoinState {
    pub fn apply(&mut self, signal: &Signal) {
        match signal {
            Signal::MarketList(l) => self.market_list.apply(l),
            Signal::SelectedCoin(l) => {
                self.selected.apply(l);
                if let Some(first) = l.payload().and_then(|v| v.first()) {
                    self.selected_coin = Some(first.clone());
                }
            }
            Signal::TickerList(l) => self.ticker_list.apply(l),
            Signal::TradeList(l) => match l {
                Lifecycle::Requested => self.trade_list.begin(),
                Lifecycle::Succeeded(trades) => {
                    self.trade_list.finish(TradeHistory::from_trades(trades.clone()));
                }
                Lifecycle::Failed { error } => self.trade_list.fail(error),
            },
            Signal::Orderbook(l) => self.orderbook.apply(l),
            Signal::CandleData(l) => self.candle_data.apply(l),
            Signal::MarketNameChanged { market_name } => {
                self.market_name = market_name.clone();
            }
        }
    }

    pub fn selected_code(&self) -> Option<MarketCode> {
        self.selected_coin.as_ref().map(|t| t.market.clone())
    }

    /// Order book of the selected coin, if loaded.
    pub fn selected_orderbook(&self) -> Option<&OrderBook> {
        let code = self.selected_coin.as_ref().map(|t| &t.market)?;
        self.orderbook.data.iter().find(|b| &b.market == code)
    }
}

/// Shared, lock-protected [`CoinState`].
#[derive(Clone, Default)]
pub struct CoinStore {
    inner: Arc<RwLock<CoinState>>,
}

impl CoinStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> CoinState {
        self.read().clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&CoinState) -> R) -> R {
        f(&self.read())
    }

    // A panicking reader cannot leave the state half-applied, so poison is ignored.
    fn read(&self) -> RwLockReadGuard<'_, CoinState> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, CoinState> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl Dispatch for CoinStore {
    fn dispatch(&self, signal: Signal) {
        self.write().apply(&signal);
    }
}

impl StateReader for CoinStore {
    fn selected_code(&self) -> Option<MarketCode> {
        self.read().selected_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::Trade;
    use crate::shared::{AskBid, Change};
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn ticker(code: &str) -> Ticker {
        Ticker {
            market: MarketCode::from(code),
            trade_price: Decimal::from(100),
            opening_price: Decimal::from(90),
            high_price: Decimal::from(110),
            low_price: Decimal::from(85),
            prev_closing_price: Decimal::from(90),
            change: Change::Rise,
            change_price: Decimal::from(10),
            change_rate: Decimal::new(1111, 4),
            signed_change_price: Decimal::from(10),
            signed_change_rate: Decimal::new(1111, 4),
            trade_volume: Decimal::ONE,
            acc_trade_price_24h: Decimal::from(1_000_000),
            acc_trade_volume_24h: Decimal::from(10_000),
            highest_52_week_price: None,
            lowest_52_week_price: None,
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        }
    }

    fn trade(id: u64) -> Trade {
        Trade {
            market: MarketCode::from("KRW-BTC"),
            sequential_id: id,
            timestamp: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            price: Decimal::from(100),
            volume: Decimal::ONE,
            prev_closing_price: Decimal::from(90),
            change_price: Decimal::from(10),
            side: AskBid::Bid,
        }
    }

    fn failed<T>() -> Lifecycle<T> {
        Lifecycle::Failed {
            error: Arc::new(SdkError::Other("boom".into())),
        }
    }

    #[test]
    fn test_requested_sets_loading_and_clears_error() {
        let mut state = CoinState::default();
        state.apply(&Signal::TickerList(failed()));
        assert!(state.ticker_list.error.is_some());

        state.apply(&Signal::TickerList(Lifecycle::Requested));
        assert!(state.ticker_list.loading);
        assert!(state.ticker_list.error.is_none());
    }

    #[test]
    fn test_failure_keeps_previous_data() {
        let mut state = CoinState::default();
        state.apply(&Signal::TickerList(Lifecycle::Succeeded(vec![ticker("KRW-BTC")])));
        state.apply(&Signal::TickerList(Lifecycle::Requested));
        state.apply(&Signal::TickerList(failed()));

        assert!(!state.ticker_list.loading);
        assert_eq!(state.ticker_list.data.len(), 1);
        assert_eq!(state.ticker_list.error.as_ref().unwrap().to_string(), "boom");
    }

    #[test]
    fn test_selected_coin_success_sets_selection() {
        let mut state = CoinState::default();
        state.apply(&Signal::SelectedCoin(Lifecycle::Succeeded(vec![ticker("KRW-ETH")])));
        assert_eq!(state.selected_code(), Some(MarketCode::from("KRW-ETH")));

        // An empty result leaves the previous selection in place.
        state.apply(&Signal::SelectedCoin(Lifecycle::Succeeded(vec![])));
        assert_eq!(state.selected_code(), Some(MarketCode::from("KRW-ETH")));
    }

    #[test]
    fn test_trade_list_fills_history() {
        let mut state = CoinState::default();
        state.apply(&Signal::TradeList(Lifecycle::Requested));
        assert!(state.trade_list.loading);

        state.apply(&Signal::TradeList(Lifecycle::Succeeded(vec![trade(3), trade(2), trade(1)])));
        assert!(!state.trade_list.loading);
        assert_eq!(state.trade_list.data.len(), 3);
        assert_eq!(state.trade_list.data.latest().unwrap().sequential_id, 3);
    }

    #[test]
    fn test_trade_list_keeps_every_fetched_trade() {
        let store = CoinStore::new();
        let trades: Vec<_> = (1..=100).rev().map(trade).collect();
        store.dispatch(Signal::TradeList(Lifecycle::Succeeded(trades)));

        let state = store.snapshot();
        assert_eq!(state.trade_list.data.len(), 100);
        assert_eq!(state.trade_list.data.latest().unwrap().sequential_id, 100);
    }

    #[test]
    fn test_market_name_changed() {
        let mut state = CoinState::default();
        state.apply(&Signal::MarketNameChanged {
            market_name: "비트코인".into(),
        });
        assert_eq!(state.market_name, "비트코인");
    }

    #[test]
    fn test_store_dispatch_and_reader() {
        let store = CoinStore::new();
        assert_eq!(StateReader::selected_code(&store), None);

        store.dispatch(Signal::SelectedCoin(Lifecycle::Succeeded(vec![ticker("KRW-XRP")])));
        assert_eq!(
            StateReader::selected_code(&store),
            Some(MarketCode::from("KRW-XRP"))
        );
        assert!(store.with(|s| s.selected_coin.is_some()));
        assert_eq!(store.snapshot().selected.data.len(), 1);
    }
}
