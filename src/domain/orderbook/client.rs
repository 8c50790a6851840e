//! Orderbooks sub-client — depth snapshots (never cached, always fresh).

use crate::client::UpbitClient;
use crate::domain::orderbook::{self, OrderBook};
use crate::error::SdkError;
use crate::shared::MarketCode;

/// Sub-client for orderbook operations.
pub struct Orderbooks<'a> {
    pub(crate) client: &'a UpbitClient,
}

impl<'a> Orderbooks<'a> {
    pub async fn get(&self, codes: &[MarketCode]) -> Result<Vec<OrderBook>, SdkError> {
        let resp = self.client.http.get_orderbooks(codes).await?;
        resp.into_iter()
            .map(|ob| {
                OrderBook::try_from(ob)
                    .map_err(|e: orderbook::ValidationError| SdkError::Validation(e.to_string()))
            })
            .collect()
    }
}
