//! Trade state containers — app-owned, SDK-provided update logic.

use super::Trade;
use std::collections::VecDeque;

/// Rolling trade history buffer for the selected market.
///
/// Newest trade at the front.
#[derive(Debug, Clone)]
pub struct TradeHistory {
    trades: VecDeque<Trade>,
    max_size: usize,
}

impl TradeHistory {
    pub fn new(max_size: usize) -> Self {
        Self {
            trades: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// History holding a whole fetch, never smaller than the default capacity.
    pub fn from_trades(trades: Vec<Trade>) -> Self {
        let max_size = trades
            .len()
            .max(crate::network::DEFAULT_TRADE_COUNT as usize);
        let mut history = Self::new(max_size);
        history.replace(trades);
        history
    }

    /// Replace all trades with a REST fetch (already newest first).
    pub fn replace(&mut self, trades: Vec<Trade>) {
        self.trades.clear();
        for trade in trades.into_iter().take(self.max_size) {
            self.trades.push_back(trade);
        }
    }

    pub fn trades(&self) -> &VecDeque<Trade> {
        &self.trades
    }

    pub fn latest(&self) -> Option<&Trade> {
        self.trades.front()
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }
}

impl Default for TradeHistory {
    fn default() -> Self {
        Self::new(crate::network::DEFAULT_TRADE_COUNT as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{AskBid, MarketCode};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn make_trade(id: u64, price: i64) -> Trade {
        Trade {
            market: MarketCode::from("KRW-BTC"),
            sequential_id: id,
            timestamp: Utc::now(),
            price: Decimal::from(price),
            volume: Decimal::ONE,
            prev_closing_price: Decimal::from(price),
            change_price: Decimal::ZERO,
            side: AskBid::Bid,
        }
    }

    #[test]
    fn test_replace_keeps_newest_first() {
        let mut th = TradeHistory::new(10);
        th.replace(vec![make_trade(2, 51), make_trade(1, 50)]);
        assert_eq!(th.len(), 2);
        assert_eq!(th.latest().unwrap().sequential_id, 2);
    }

    #[test]
    fn test_replace_truncates_to_capacity() {
        let mut th = TradeHistory::new(2);
        th.replace(vec![make_trade(1, 50)]);
        th.replace(vec![make_trade(9, 49), make_trade(8, 50), make_trade(7, 51)]);
        assert_eq!(th.len(), 2);
        assert_eq!(th.latest().unwrap().sequential_id, 9);
    }

    #[test]
    fn test_from_trades_keeps_whole_fetch() {
        let trades: Vec<_> = (1..=120).rev().map(|id| make_trade(id, 50)).collect();
        let th = TradeHistory::from_trades(trades);
        assert_eq!(th.len(), 120);
        assert_eq!(th.latest().unwrap().sequential_id, 120);
        assert_eq!(th.trades().back().unwrap().sequential_id, 1);
    }

    #[test]
    fn test_from_trades_small_fetch_uses_default_capacity() {
        let th = TradeHistory::from_trades(vec![make_trade(1, 50)]);
        assert_eq!(th.len(), 1);
        assert!(!th.is_empty());
    }
}
