//! Exchange-rate lookup client for relay.
//!
//! One GET against a public rates endpoint, then the base currency, the
//! last-update timestamp and a single target rate are printed.

mod fetcher;
mod render;

pub use fetcher::{EXCHANGE_RATE_ENDPOINT, RateFetcher, parse_response};
pub use render::{PLACEHOLDER, render_summary};

/// Currency whose rate is reported.
pub const TARGET_CURRENCY: &str = "INR";
