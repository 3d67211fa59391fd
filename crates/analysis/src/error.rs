// In crates/analysis/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not enough data to analyze: {reason}")]
    InsufficientData { reason: String },

    #[error("Moving-average window must be at least 1")]
    InvalidWindow,
}

pub type Result<T> = std::result::Result<T, Error>;
