//! Candles sub-client — OHLCV queries by calendar bucket or minute multiple.

use crate::client::UpbitClient;
use crate::domain::candle::wire::CandleResponse;
use crate::domain::candle::{self, Candle};
use crate::error::SdkError;
use crate::shared::{CandleRequest, CandleType, DateUnit, MarketCode, MinuteUnit};

/// Sub-client for candle operations.
pub struct Candles<'a> {
    pub(crate) client: &'a UpbitClient,
}

impl<'a> Candles<'a> {
    pub async fn by_date(
        &self,
        code: &MarketCode,
        unit: DateUnit,
    ) -> Result<Vec<Candle>, SdkError> {
        let resp = self
            .client
            .http
            .get_candles_by_date(code, unit, self.client.candle_count)
            .await?;
        convert_all(resp)
    }

    pub async fn by_minutes(
        &self,
        code: &MarketCode,
        unit: MinuteUnit,
    ) -> Result<Vec<Candle>, SdkError> {
        let resp = self
            .client
            .http
            .get_candles_by_minutes(code, unit, self.client.candle_count)
            .await?;
        convert_all(resp)
    }

    /// Fetch whichever series a chart interval resolves to.
    pub async fn for_type(
        &self,
        code: &MarketCode,
        ty: CandleType,
    ) -> Result<Vec<Candle>, SdkError> {
        match ty.request() {
            CandleRequest::ByDate(unit) => self.by_date(code, unit).await,
            CandleRequest::ByMinutes(unit) => self.by_minutes(code, unit).await,
        }
    }
}

fn convert_all(resp: Vec<CandleResponse>) -> Result<Vec<Candle>, SdkError> {
    resp.into_iter()
        .map(|c| {
            Candle::try_from(c)
                .map_err(|e: candle::ValidationError| SdkError::Validation(e.to_string()))
        })
        .collect()
}
