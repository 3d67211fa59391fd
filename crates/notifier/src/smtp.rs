// In crates/notifier/src/smtp.rs

use crate::types::OutboundMessage;
use crate::{Error, Notifier, Result};
use app_config::types::EmailSettings;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Delivers messages over an authenticated TLS SMTP relay.
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotifier {
    /// Creates a new `SmtpNotifier` from the email settings.
    ///
    /// Building the transport resolves configuration only; no connection is
    /// opened until the first send.
    pub fn new(settings: &EmailSettings) -> Result<Self> {
        let credentials =
            Credentials::new(settings.username.clone(), settings.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.smtp_host)
            .map_err(Error::TransportBuild)?
            .port(settings.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from_address: settings.from_address.clone(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    fn name(&self) -> &'static str {
        "SmtpNotifier"
    }

    async fn send(&self, message: &OutboundMessage) -> Result<()> {
        let email = Message::builder()
            .from(self.from_address.parse().map_err(Error::InvalidAddress)?)
            .to(message.to.parse().map_err(Error::InvalidAddress)?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(Error::MessageBuild)?;

        self.transport
            .send(email)
            .await
            .map_err(Error::SendFailed)?;

        tracing::info!(to = %message.to, "Notification delivered.");
        Ok(())
    }
}
