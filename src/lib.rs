//! # coinboard
//!
//! Market-data coordination for a crypto dashboard backed by the Upbit
//! quotation API.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, errors (always available)
//! 2. **HTTP API** — `UpbitHttp` with retry policies
//! 3. **High-Level Client** — `UpbitClient` with nested sub-clients
//! 4. **Coordinator** — Trigger events in, lifecycle signals out
//! 5. **Store** — Reducer that folds signals into dashboard state
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinboard::prelude::*;
//! use std::sync::Arc;
//!
//! let client = UpbitClient::builder().build()?;
//! let store = CoinStore::new();
//! let coordinator = MarketDataCoordinator::new(Arc::new(client), Arc::new(store.clone()));
//!
//! let (tx, rx) = tokio::sync::mpsc::channel(16);
//! Watcher::new(coordinator, Arc::new(store.clone())).spawn(rx);
//! tx.send(TriggerEvent::coin_selected("비트코인", "KRW-BTC")).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified error types.
pub mod error;

/// Network URL constants and request defaults.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `UpbitClient` — the primary entry point for quotation data.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Coordinator ─────────────────────────────────────────────────────

/// Trigger handling and lifecycle signals.
pub mod coordinator;

// ── Layer 5: Store ───────────────────────────────────────────────────────────

/// Dashboard state fed by signals.
pub mod store;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{AskBid, CandleType, Change, DateUnit, MarketCode, MinuteUnit};

    // Domain types
    pub use crate::domain::candle::Candle;
    pub use crate::domain::market::{MarketInfo, MarketWarning};
    pub use crate::domain::orderbook::{OrderBook, OrderbookUnit};
    pub use crate::domain::ticker::Ticker;
    pub use crate::domain::trade::{Trade, TradeHistory};

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CandlesClient, MarketsClient, OrderbooksClient, TickersClient, TradesClient,
        UpbitClient, UpbitClientBuilder,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Coordinator
    pub use crate::coordinator::{
        Broadcast, Dispatch, FetchKind, Lifecycle, MarketDataApi, MarketDataCoordinator, Phase,
        Signal, StateReader, TriggerEvent, TriggerKind, TriggerPolicy, Watcher,
    };

    // State containers
    pub use crate::store::{CoinState, CoinStore, Loadable};
}
