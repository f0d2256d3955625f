//! Exchange-rate snapshot types.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::HashMap;

/// Exchange-rate snapshot as served by open.er-api.com.
///
/// Every field is optional: an absent key deserializes to `None` so callers
/// can print a placeholder instead of failing. Unknown fields are ignored.
/// Rates stay as JSON numbers, so an integer rate prints as `83`, not `83.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Getters)]
pub struct ExchangeRateResponse {
    #[serde(default)]
    base_code: Option<String>,
    #[serde(default)]
    time_last_update_utc: Option<String>,
    #[serde(default)]
    rates: Option<HashMap<String, Number>>,
}

impl ExchangeRateResponse {
    /// Creates a fully populated snapshot.
    pub fn new(
        base_code: impl Into<String>,
        time_last_update_utc: impl Into<String>,
        rates: HashMap<String, Number>,
    ) -> Self {
        Self {
            base_code: Some(base_code.into()),
            time_last_update_utc: Some(time_last_update_utc.into()),
            rates: Some(rates),
        }
    }

    /// Rate for `currency`, or `None` when either the rates table or the
    /// currency is missing.
    pub fn rate(&self, currency: &str) -> Option<&Number> {
        self.rates.as_ref()?.get(currency)
    }
}

/// The fields printed for one currency out of a snapshot.
///
/// # Examples
///
/// ```
/// use relay_core::{ExchangeRateResponse, RateSummary};
///
/// let response: ExchangeRateResponse =
///     serde_json::from_str(r#"{"base_code": "USD"}"#).unwrap();
/// let summary = RateSummary::from_response(&response, "INR");
///
/// assert_eq!(summary.base_code().as_deref(), Some("USD"));
/// assert_eq!(*summary.rate(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct RateSummary {
    base_code: Option<String>,
    last_updated: Option<String>,
    target: String,
    rate: Option<Number>,
}

impl RateSummary {
    /// Extracts the summary using safe-default lookups; never fails.
    pub fn from_response(response: &ExchangeRateResponse, target: impl Into<String>) -> Self {
        let target = target.into();
        Self {
            base_code: response.base_code.clone(),
            last_updated: response.time_last_update_utc.clone(),
            rate: response.rate(&target).cloned(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_unknown_fields() {
        let body = r#"{
            "result": "success",
            "provider": "https://www.exchangerate-api.com",
            "time_last_update_unix": 1704067201,
            "base_code": "USD",
            "time_last_update_utc": "Mon, 01 Jan 2024 00:00:01 +0000",
            "rates": {"USD": 1, "INR": 83.5}
        }"#;
        let response: ExchangeRateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.base_code().as_deref(), Some("USD"));
        assert_eq!(response.rate("INR").and_then(Number::as_f64), Some(83.5));
        assert_eq!(response.rate("USD").and_then(Number::as_u64), Some(1));
    }

    #[test]
    fn missing_currency_is_none() {
        let response: ExchangeRateResponse =
            serde_json::from_str(r#"{"rates": {"EUR": 0.91}}"#).unwrap();
        let summary = RateSummary::from_response(&response, "INR");
        assert_eq!(summary.target(), "INR");
        assert_eq!(*summary.rate(), None);
        assert_eq!(*summary.last_updated(), None);
    }

    #[test]
    fn empty_object_parses() {
        let response: ExchangeRateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response, ExchangeRateResponse::default());
    }

    #[test]
    fn null_rates_parse_as_absent() {
        let response: ExchangeRateResponse =
            serde_json::from_str(r#"{"base_code": null, "rates": null}"#).unwrap();
        assert_eq!(response.rate("INR"), None);
        assert_eq!(*response.base_code(), None);
    }
}
