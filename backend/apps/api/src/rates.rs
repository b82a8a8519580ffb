//! Exchange Rates Proxy
//!
//! Thin adapter over the openexchangerates.org latest-rates endpoint.
//! The page degrades gracefully: any upstream failure renders as a
//! 200 with an error payload instead of surfacing a 5xx.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::extract::State;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

const DEFAULT_ENDPOINT: &str = "https://openexchangerates.org/api/latest.json";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Rate fetch errors (logged, never shown verbatim to clients)
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned status {0}")]
    Status(u16),

    #[error("Failed to decode rates payload: {0}")]
    Decode(String),
}

/// Latest exchange rates, keyed by currency code
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeRates {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

/// Provider of latest exchange rates
#[trait_variant::make(RateProvider: Send)]
pub trait LocalRateProvider {
    async fn latest(&self) -> Result<ExchangeRates, RateError>;
}

/// Reqwest-backed provider against openexchangerates.org
pub struct HttpRateProvider {
    client: Client,
    endpoint: String,
    app_id: String,
}

impl HttpRateProvider {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(app_id: String) -> Result<Self, reqwest::Error> {
        Self::with_endpoint(DEFAULT_ENDPOINT.to_string(), app_id)
    }

    pub fn with_endpoint(endpoint: String, app_id: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            endpoint,
            app_id,
        })
    }
}

impl RateProvider for HttpRateProvider {
    async fn latest(&self) -> Result<ExchangeRates, RateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("app_id", self.app_id.as_str())])
            .send()
            .await
            .map_err(|e| RateError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RateError::Status(status.as_u16()));
        }

        response
            .json::<ExchangeRates>()
            .await
            .map_err(|e| RateError::Decode(e.to_string()))
    }
}

/// GET /exchange-rates
pub async fn exchange_rates<P>(State(provider): State<Arc<P>>) -> Json<serde_json::Value>
where
    P: RateProvider + Send + Sync + 'static,
{
    match provider.latest().await {
        Ok(rates) => Json(json!({
            "base": rates.base,
            "rates": rates.rates,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Exchange rate fetch failed");
            Json(json!({ "error": "An error occurred" }))
        }
    }
}
