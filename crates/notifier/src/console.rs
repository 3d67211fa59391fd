// In crates/notifier/src/console.rs

use crate::types::OutboundMessage;
use crate::{Notifier, Result};
use async_trait::async_trait;

/// A dry-run notifier that prints the message instead of sending it.
///
/// Used by `run --dry-run`, and handy when exercising the pipeline without
/// SMTP credentials.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn name(&self) -> &'static str {
        "ConsoleNotifier"
    }

    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        tracing::info!(to = %message.to, "Dry run: printing the message instead of sending.");
        println!("To: {}", message.to);
        println!("Subject: {}", message.subject);
        println!();
        println!("{}", message.body);
        Ok(())
    }
}
