//! HTTP client for the open.er-api.com latest-rates endpoint.

use relay_core::ExchangeRateResponse;
use relay_error::{HttpError, JsonError, RelayResult};
use reqwest::Client;
use tracing::{debug, error, instrument};

/// Latest USD-based rates, no authentication required.
pub const EXCHANGE_RATE_ENDPOINT: &str = "https://open.er-api.com/v6/latest/USD";

/// Fetches one exchange-rate snapshot per call.
#[derive(Debug, Clone)]
pub struct RateFetcher {
    client: Client,
    endpoint: String,
}

impl RateFetcher {
    /// Creates a fetcher for [`EXCHANGE_RATE_ENDPOINT`].
    pub fn new() -> Self {
        Self::with_endpoint(EXCHANGE_RATE_ENDPOINT)
    }

    /// Creates a fetcher for a different URL.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Returns the URL this fetcher queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues one GET and parses the body.
    ///
    /// # Errors
    ///
    /// [`HttpError`] on transport failure or a non-success status,
    /// [`JsonError`] if the body is not JSON of the expected shape.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch(&self) -> RelayResult<ExchangeRateResponse> {
        let response = self.client.get(&self.endpoint).send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            HttpError::new(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Exchange-rate API error");
            return Err(HttpError::status(status.as_u16(), body).into());
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            HttpError::new(format!("Failed to read body: {}", e))
        })?;
        debug!(bytes = body.len(), "Received response");

        parse_response(&body)
    }
}

impl Default for RateFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses an exchange-rate body. Missing fields are tolerated; a body that
/// is not JSON, or has a field of the wrong type, is not.
pub fn parse_response(body: &str) -> RelayResult<ExchangeRateResponse> {
    let parsed = serde_json::from_str(body).map_err(|e| {
        error!(error = %e, "Failed to parse exchange-rate body");
        JsonError::new(format!("Failed to parse JSON: {}", e))
    })?;
    Ok(parsed)
}
