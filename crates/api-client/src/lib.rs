// In crates/api-client/src/lib.rs

use std::time::Duration;

use app_config::types::ProviderSettings;
use chrono::DateTime;
use core_types::{Observation, Symbol};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

pub mod error;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use types::*;

impl MarketDataClient {
    /// Constructs a new MarketDataClient from ProviderSettings.
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            // The provider rejects requests without a client identity.
            .user_agent(concat!("sentinel/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::ClientBuildError(e.to_string()))?;

        Ok(MarketDataClient {
            http_client,
            base_url: settings.base_url.clone(),
            range: settings.range.clone(),
        })
    }

    /// Fetches the daily close series for one symbol, oldest day first.
    ///
    /// This corresponds to the `GET /v8/finance/chart/{symbol}` endpoint.
    /// Non-trading placeholders (null closes) are dropped from the series;
    /// a series with no usable observation at all is an error.
    pub async fn get_daily_closes(&self, symbol: &Symbol) -> Result<Vec<Observation>> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol.0, self.range
        );

        tracing::debug!(symbol = %symbol.0, range = %self.range, "Fetching daily closes.");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(Error::RequestFailed)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
            });
        }

        let text = response.text().await.map_err(Error::RequestFailed)?;
        let chart: ChartResponse =
            serde_json::from_str(&text).map_err(Error::DeserializationFailed)?;

        // The provider reports failures in-band, so check for that first.
        if let Some(error) = chart.chart.error {
            return Err(Error::ApiError {
                code: error.code,
                description: error.description,
            });
        }

        let result = chart
            .chart
            .result
            .as_ref()
            .and_then(|results| results.first())
            .ok_or_else(|| Error::MalformedPayload("no chart result in response".to_string()))?;

        observations_from_chart(symbol, result)
    }
}

/// Converts one chart result into an ordered observation series.
fn observations_from_chart(symbol: &Symbol, result: &ChartResult) -> Result<Vec<Observation>> {
    let timestamps = result
        .timestamp
        .as_ref()
        .ok_or_else(|| Error::MalformedPayload("no timestamp series".to_string()))?;
    let closes = result
        .indicators
        .quote
        .first()
        .and_then(|quote| quote.close.as_ref())
        .ok_or_else(|| Error::MalformedPayload("no close series".to_string()))?;

    let mut observations = Vec::with_capacity(timestamps.len());
    let mut skipped = 0usize;

    for (&timestamp, close) in timestamps.iter().zip(closes) {
        // Null closes mark non-trading placeholders; a close the Decimal
        // cannot represent (NaN from a malformed row) is treated the same.
        let Some(close) = close.and_then(Decimal::from_f64) else {
            skipped += 1;
            continue;
        };

        let date = DateTime::from_timestamp(timestamp, 0)
            .ok_or_else(|| Error::MalformedPayload(format!("invalid timestamp {timestamp}")))?
            .date_naive();

        observations.push(Observation { date, close });
    }

    if skipped > 0 {
        tracing::debug!(symbol = %symbol.0, skipped, "Dropped placeholder rows from the series.");
    }

    if observations.is_empty() {
        return Err(Error::EmptySeries {
            symbol: symbol.0.clone(),
        });
    }

    Ok(observations)
}
