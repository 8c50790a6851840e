//! Trigger events raised by the dashboard UI.

use crate::shared::{CandleType, MarketCode};

/// A user action the coordinator reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A coin row was clicked.
    CoinSelected {
        market_name: String,
        code: MarketCode,
    },
    /// The chart interval toolbar changed. `interval` is the raw tag the UI
    /// sent, validated only when the handler runs.
    CandleIntervalChanged { interval: String },
}

impl TriggerEvent {
    pub fn coin_selected(market_name: impl Into<String>, code: impl Into<MarketCode>) -> Self {
        TriggerEvent::CoinSelected {
            market_name: market_name.into(),
            code: code.into(),
        }
    }

    pub fn candle_interval(ty: CandleType) -> Self {
        TriggerEvent::CandleIntervalChanged {
            interval: ty.as_str().to_string(),
        }
    }

    pub fn trigger_kind(&self) -> TriggerKind {
        match self {
            TriggerEvent::CoinSelected { .. } => TriggerKind::CoinSelected,
            TriggerEvent::CandleIntervalChanged { .. } => TriggerKind::CandleIntervalChanged,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    CoinSelected,
    CandleIntervalChanged,
}
