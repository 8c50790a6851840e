//! Wire types for market responses (REST).

use serde::{Deserialize, Serialize};

/// One entry of `GET /market/all`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketResponse {
    pub market: String,
    pub korean_name: String,
    pub english_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_warning: Option<String>,
}
