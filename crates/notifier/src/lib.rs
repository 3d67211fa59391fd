// In crates/notifier/src/lib.rs

use async_trait::async_trait;

pub mod console;
pub mod error;
pub mod smtp;
pub mod types;

// Re-export public types
pub use console::ConsoleNotifier;
pub use error::{Error, Result};
pub use smtp::SmtpNotifier;
pub use types::OutboundMessage;

/// The universal interface for a notification sender.
///
/// A `Notifier` takes a fully composed message and transmits it to one
/// recipient. Delivery is the run's other side-effecting boundary besides
/// the data fetch: a failure here is reported to the caller, never retried
/// internally, and must not undo the computation that produced the message.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// The name of the notifier (e.g., "SmtpNotifier", "ConsoleNotifier").
    fn name(&self) -> &'static str;

    /// Delivers a composed message to its recipient.
    async fn send(&self, message: &OutboundMessage) -> Result<()>;
}
