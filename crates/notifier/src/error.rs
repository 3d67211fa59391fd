// In crates/notifier/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to build the SMTP transport: {0}")]
    TransportBuild(#[source] lettre::transport::smtp::Error),

    #[error("Invalid email address: {0}")]
    InvalidAddress(#[from] lettre::address::AddressError),

    #[error("Failed to build the message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    #[error("Failed to send the message: {0}")]
    SendFailed(#[source] lettre::transport::smtp::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
