//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, dashboard-ready)
//! - `wire.rs` — Raw serde structs matching exchange responses
//! - `convert.rs` — `TryFrom`/`From` conversions with validation
//! - `client.rs` — Sub-client with HTTP methods
//! - `state.rs` — State containers with update methods, where the app keeps history

pub mod candle;
pub mod market;
pub mod orderbook;
pub mod ticker;
pub mod trade;
