// In crates/api-client/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to build the API client: {0}")]
    ClientBuildError(String),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(#[from] serde_json::Error),
    #[error("Provider returned HTTP status {status}")]
    HttpStatus { status: u16 },
    #[error("Provider error: {code}: {description}")]
    ApiError { code: String, description: String },
    #[error("Malformed chart payload: {0}")]
    MalformedPayload(String),
    #[error("Provider returned no usable observations for {symbol}")]
    EmptySeries { symbol: String },
}

pub type Result<T> = std::result::Result<T, Error>;
