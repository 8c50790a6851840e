//! Market domain — tradable market codes and their display names.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::MarketCode;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── MarketWarning ───────────────────────────────────────────────────────────

/// Exchange-issued investment warning flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketWarning {
    #[default]
    None,
    Caution,
}

impl MarketWarning {
    pub fn as_str(&self) -> &str {
        match self {
            MarketWarning::None => "NONE",
            MarketWarning::Caution => "CAUTION",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "NONE" => Some(MarketWarning::None),
            "CAUTION" => Some(MarketWarning::Caution),
            _ => None,
        }
    }
}

// ─── MarketInfo ──────────────────────────────────────────────────────────────

/// A listed market with its localized names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInfo {
    pub market: MarketCode,
    pub korean_name: String,
    pub english_name: String,
    pub warning: MarketWarning,
}

impl MarketInfo {
    pub fn is_krw(&self) -> bool {
        self.market.quote() == "KRW"
    }
}

/// Keep only markets quoted in the given currency, preserving order.
pub fn filter_quote(markets: &[MarketInfo], quote: &str) -> Vec<MarketInfo> {
    markets
        .iter()
        .filter(|m| m.market.quote() == quote)
        .cloned()
        .collect()
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingMarketCode,
    MissingKoreanName,
    MissingEnglishName,
    InvalidWarning(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(code, errors) => {
                writeln!(f, "Market validation errors ({code}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingMarketCode => write!(f, "Missing market code"),
            ValidationError::MissingKoreanName => write!(f, "Missing korean name"),
            ValidationError::MissingEnglishName => write!(f, "Missing english name"),
            ValidationError::InvalidWarning(w) => write!(f, "Invalid market warning: {w}"),
        }
    }
}

impl std::error::Error for ValidationError {}
