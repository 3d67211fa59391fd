// In crates/api-client/src/types.rs

use reqwest::Client;
use serde::Deserialize;

/// The client for the market data provider's chart API.
#[derive(Debug, Clone)]
pub struct MarketDataClient {
    /// The persistent HTTP client, carrying the configured timeout.
    pub http_client: Client,
    /// The provider's REST base URL.
    pub base_url: String,
    /// How much history to request per symbol (provider range syntax).
    pub range: String,
}

/// Temporary structs to deserialize the provider's chart response, which
/// nests the series under `chart.result[0]` and reports errors in-band
/// under `chart.error`.
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct ChartEnvelope {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    /// Unix timestamps, one per trading day.
    pub timestamp: Option<Vec<i64>>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub struct ChartIndicators {
    pub quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
pub struct ChartQuote {
    /// Daily closes, aligned with `timestamp`. Non-trading placeholders
    /// arrive as nulls.
    pub close: Option<Vec<Option<f64>>>,
}
