//! Parsing helpers for exchange wire formats.

/// Parses the exchange's zone-less `"YYYY-MM-DDTHH:MM:SS"` candle times.
pub mod naive_time {
    use chrono::NaiveDateTime;

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn parse(s: &str) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(s, FORMAT).ok()
    }
}
