//! Conversion: MarketResponse → MarketInfo (TryFrom + validation).

use super::wire;
use super::{MarketInfo, MarketWarning, ValidationError};
use crate::shared::MarketCode;

impl TryFrom<wire::MarketResponse> for MarketInfo {
    type Error = ValidationError;

    fn try_from(source: wire::MarketResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        if source.market.trim().is_empty() {
            errors.push(ValidationError::MissingMarketCode);
        }
        if source.korean_name.trim().is_empty() {
            errors.push(ValidationError::MissingKoreanName);
        }
        if source.english_name.trim().is_empty() {
            errors.push(ValidationError::MissingEnglishName);
        }

        let warning = match source.market_warning.as_deref() {
            None => MarketWarning::None,
            Some(w) => MarketWarning::from_str(w).unwrap_or_else(|| {
                errors.push(ValidationError::InvalidWarning(w.to_string()));
                MarketWarning::None
            }),
        };

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(source.market, errors));
        }

        Ok(MarketInfo {
            market: MarketCode::from(source.market),
            korean_name: source.korean_name,
            english_name: source.english_name,
            warning,
        })
    }
}
