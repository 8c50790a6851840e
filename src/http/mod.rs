//! HTTP client layer — `UpbitHttp` with per-request retry policies.

pub mod client;
pub mod retry;

pub use client::UpbitHttp;
pub use retry::{RetryConfig, RetryPolicy};
