//! Low-level HTTP client — `UpbitHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the sub-client boundary). Internal to the SDK — `UpbitClient` wraps this.

use crate::domain::candle::wire::CandleResponse;
use crate::domain::market::wire::MarketResponse;
use crate::domain::orderbook::wire::OrderbookResponse;
use crate::domain::ticker::wire::TickerResponse;
use crate::domain::trade::wire::TradeResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{DateUnit, MarketCode, MinuteUnit};

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Low-level HTTP client for the Upbit quotation REST API.
#[derive(Clone)]
pub struct UpbitHttp {
    base_url: String,
    client: Client,
    retry: RetryPolicy,
}

impl UpbitHttp {
    pub fn new(
        base_url: &str,
        retry: RetryPolicy,
        timeout: Option<Duration>,
    ) -> Result<Self, HttpError> {
        let mut builder = Client::builder().pool_max_idle_per_host(10);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
            retry,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Markets ──────────────────────────────────────────────────────────

    pub async fn get_markets(&self) -> Result<Vec<MarketResponse>, HttpError> {
        let url = self.url("/market/all", &[("isDetails", "true".to_string())]);
        self.get(&url).await
    }

    // ── Tickers ──────────────────────────────────────────────────────────

    pub async fn get_tickers(
        &self,
        codes: &[MarketCode],
    ) -> Result<Vec<TickerResponse>, HttpError> {
        let url = self.url("/ticker", &[("markets", encode_codes(codes))]);
        self.get(&url).await
    }

    // ── Trades ───────────────────────────────────────────────────────────

    pub async fn get_trades(
        &self,
        code: &MarketCode,
        count: u32,
    ) -> Result<Vec<TradeResponse>, HttpError> {
        let url = self.url(
            "/trades/ticks",
            &[
                ("market", encode_codes(std::slice::from_ref(code))),
                ("count", count.to_string()),
            ],
        );
        self.get(&url).await
    }

    // ── Orderbooks ───────────────────────────────────────────────────────

    pub async fn get_orderbooks(
        &self,
        codes: &[MarketCode],
    ) -> Result<Vec<OrderbookResponse>, HttpError> {
        let url = self.url("/orderbook", &[("markets", encode_codes(codes))]);
        self.get(&url).await
    }

    // ── Candles ──────────────────────────────────────────────────────────

    pub async fn get_candles_by_date(
        &self,
        code: &MarketCode,
        unit: DateUnit,
        count: u32,
    ) -> Result<Vec<CandleResponse>, HttpError> {
        let path = format!("/candles/{}", unit.as_str());
        let url = self.url(
            &path,
            &[
                ("market", encode_codes(std::slice::from_ref(code))),
                ("count", count.to_string()),
            ],
        );
        self.get(&url).await
    }

    pub async fn get_candles_by_minutes(
        &self,
        code: &MarketCode,
        unit: MinuteUnit,
        count: u32,
    ) -> Result<Vec<CandleResponse>, HttpError> {
        let path = format!("/candles/minutes/{}", unit.minutes());
        let url = self.url(
            &path,
            &[
                ("market", encode_codes(std::slice::from_ref(code))),
                ("count", count.to_string()),
            ],
        );
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        let mut url = format!("{}{}", self.base_url, path);
        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join("&");
            url = format!("{}?{}", url, query);
        }
        url
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let config = match &self.retry {
            RetryPolicy::None => {
                return self.do_request(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut attempt = 0;
        loop {
            let err = match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };
            let delay = plan_retry(&config, attempt, err)?;
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                "Retrying request to {}",
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        tracing::debug!("GET {}", url);
        let resp = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let retry_after_ms = resp
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let body_text = error_message(&resp.text().await.unwrap_or_default());

        Err(status_error(status.as_u16(), body_text, retry_after_ms))
    }
}

/// Delay before the next attempt, or the error that ends the request.
///
/// A server `Retry-After` replaces the backoff delay rather than adding to it.
/// A retryable error on the final attempt becomes `MaxRetriesExceeded`.
fn plan_retry(
    config: &RetryConfig,
    attempt: u32,
    err: HttpError,
) -> Result<Duration, HttpError> {
    let backoff = || config.delay_for_attempt(attempt);
    let delay = match &err {
        HttpError::ServerError { status, .. } if config.retryable_statuses.contains(status) => {
            Some(backoff())
        }
        HttpError::RateLimited { retry_after_ms } if config.retryable_statuses.contains(&429) => {
            Some(retry_after_ms.map_or_else(backoff, Duration::from_millis))
        }
        HttpError::Timeout => Some(backoff()),
        HttpError::Reqwest(re) if re.is_connect() || re.is_timeout() || re.is_request() => {
            Some(backoff())
        }
        _ => None,
    };
    let Some(delay) = delay else {
        return Err(err);
    };

    if attempt >= config.max_retries {
        return Err(HttpError::MaxRetriesExceeded {
            attempts: attempt + 1,
            last_error: err.to_string(),
        });
    }
    Ok(delay)
}

/// `Retry-After` in whole seconds, as milliseconds.
fn parse_retry_after(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok().map(|secs| secs.saturating_mul(1000))
}

/// Map a non-success status to the error taxonomy.
fn status_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    match status {
        401 => HttpError::Unauthorized,
        404 => HttpError::NotFound(body),
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => HttpError::BadRequest(body),
        _ => HttpError::ServerError { status, body },
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Pull `error.message` out of an exchange error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody {
                message: Some(m), ..
            },
        }) => m,
        Ok(ErrorEnvelope {
            error: ErrorBody { name: Some(n), .. },
        }) => n,
        _ => body.to_string(),
    }
}

fn encode_codes(codes: &[MarketCode]) -> String {
    codes
        .iter()
        .map(|c| urlencoding::encode(c.as_str()).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}
