//! Tickers sub-client — present prices.

use crate::client::UpbitClient;
use crate::domain::ticker::{self, Ticker};
use crate::error::SdkError;
use crate::shared::MarketCode;

pub struct Tickers<'a> {
    pub(crate) client: &'a UpbitClient,
}

impl<'a> Tickers<'a> {
    /// Present prices for every code, in the order the exchange returns them.
    pub async fn get(&self, codes: &[MarketCode]) -> Result<Vec<Ticker>, SdkError> {
        let resp = self.client.http.get_tickers(codes).await?;
        resp.into_iter()
            .map(|t| {
                Ticker::try_from(t)
                    .map_err(|e: ticker::ValidationError| SdkError::Validation(e.to_string()))
            })
            .collect()
    }
}
