//! Markets sub-client — listed market codes.

use crate::client::UpbitClient;
use crate::domain::market::{self, MarketInfo};
use crate::error::SdkError;

/// Sub-client for market operations.
pub struct Markets<'a> {
    pub(crate) client: &'a UpbitClient,
}

impl<'a> Markets<'a> {
    /// Every listed market, in exchange order.
    pub async fn all(&self) -> Result<Vec<MarketInfo>, SdkError> {
        let resp = self.client.http.get_markets().await?;
        resp.into_iter()
            .map(|m| {
                MarketInfo::try_from(m)
                    .map_err(|e: market::ValidationError| SdkError::Validation(e.to_string()))
            })
            .collect()
    }

    /// Markets quoted in KRW.
    pub async fn krw(&self) -> Result<Vec<MarketInfo>, SdkError> {
        let all = self.all().await?;
        Ok(market::filter_quote(&all, "KRW"))
    }
}
