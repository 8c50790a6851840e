//! Trigger watcher: routes UI events to coordinator handlers.
//!
//! Each event spawns its own handler task, so a slow fetch never blocks the
//! queue. Under [`TriggerPolicy::Every`] handlers for the same trigger may
//! overlap and their signals interleave; under [`TriggerPolicy::Latest`] a new
//! event aborts the in-flight handler of the same kind.

use super::event::{TriggerEvent, TriggerKind};
use super::MarketDataCoordinator;
use crate::shared::MarketCode;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle, JoinSet};

/// Read access to the piece of application state handlers depend on.
pub trait StateReader: Send + Sync {
    /// Code of the coin currently shown in the detail pane.
    fn selected_code(&self) -> Option<MarketCode>;
}

impl StateReader for MarketCode {
    fn selected_code(&self) -> Option<MarketCode> {
        Some(self.clone())
    }
}

/// How overlapping events of the same kind are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriggerPolicy {
    /// Run every handler to completion.
    #[default]
    Every,
    /// Abort the previous handler of the same kind. An aborted handler may
    /// leave its dataset at `Requested` until the newer handler finishes.
    Latest,
}

pub struct Watcher {
    coordinator: MarketDataCoordinator,
    state: Arc<dyn StateReader>,
    policy: TriggerPolicy,
}

impl Watcher {
    pub fn new(coordinator: MarketDataCoordinator, state: Arc<dyn StateReader>) -> Self {
        Self {
            coordinator,
            state,
            policy: TriggerPolicy::default(),
        }
    }

    pub fn policy(mut self, policy: TriggerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run [`Watcher::run`] on the current runtime.
    pub fn spawn(self, events: mpsc::Receiver<TriggerEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(events))
    }

    /// Handle events until the sender side closes, then wait for in-flight
    /// handlers to finish.
    pub async fn run(self, mut events: mpsc::Receiver<TriggerEvent>) {
        let mut tasks = JoinSet::new();
        let mut in_flight: HashMap<TriggerKind, AbortHandle> = HashMap::new();
        tracing::info!(policy = ?self.policy, "trigger watcher started");

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        let kind = event.trigger_kind();
                        if self.policy == TriggerPolicy::Latest {
                            if let Some(prev) = in_flight.remove(&kind) {
                                tracing::debug!(?kind, "superseding in-flight handler");
                                prev.abort();
                            }
                        }
                        let handle = tasks.spawn(self.handler(event));
                        in_flight.insert(kind, handle);
                    }
                    None => break,
                },
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    log_join(joined);
                }
            }
        }

        tracing::debug!(pending = tasks.len(), "trigger channel closed; draining");
        while let Some(joined) = tasks.join_next().await {
            log_join(joined);
        }
        tracing::info!("trigger watcher stopped");
    }

    /// Build the handler future. State is read here, at dispatch time.
    fn handler(
        &self,
        event: TriggerEvent,
    ) -> impl std::future::Future<Output = ()> + Send + 'static {
        let coordinator = self.coordinator.clone();
        let selected = match &event {
            TriggerEvent::CandleIntervalChanged { .. } => self.state.selected_code(),
            TriggerEvent::CoinSelected { .. } => None,
        };

        async move {
            match event {
                TriggerEvent::CoinSelected { market_name, code } => {
                    tracing::debug!(%code, %market_name, "coin selected");
                    coordinator.change_selected_coin(&market_name, &code).await;
                }
                TriggerEvent::CandleIntervalChanged { interval } => {
                    tracing::debug!(%interval, "candle interval changed");
                    coordinator.change_candle_data(selected, &interval).await;
                }
            }
        }
    }
}

fn log_join(joined: Result<(), tokio::task::JoinError>) {
    match joined {
        Ok(()) => {}
        Err(e) if e.is_cancelled() => tracing::debug!("handler aborted"),
        Err(e) => tracing::error!(error = %e, "handler panicked"),
    }
}
