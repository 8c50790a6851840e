//! Trades sub-client — recent trade ticks.

use crate::client::UpbitClient;
use crate::domain::trade::{self, Trade};
use crate::error::SdkError;
use crate::shared::MarketCode;

pub struct Trades<'a> {
    pub(crate) client: &'a UpbitClient,
}

impl<'a> Trades<'a> {
    /// Most recent trades, newest first. `count` falls back to the client default.
    pub async fn recent(
        &self,
        code: &MarketCode,
        count: Option<u32>,
    ) -> Result<Vec<Trade>, SdkError> {
        let count = count.unwrap_or(self.client.trade_count);
        let resp = self.client.http.get_trades(code, count).await?;
        resp.into_iter()
            .map(|t| {
                Trade::try_from(t)
                    .map_err(|e: trade::ValidationError| SdkError::Validation(e.to_string()))
            })
            .collect()
    }
}
