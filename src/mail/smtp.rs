//! SmtpMailer - lettre-backed SMTP delivery

use super::{MailError, MailMessage, MailTransport};
use crate::core::Config;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::debug;

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Builds the transport from the SMTP settings in the configuration.
    /// With credentials the relay is contacted over STARTTLS; without them a
    /// plain connection is used (local debug relays).
    pub fn from_config(config: &Config) -> Result<Self, MailError> {
        let transport = match (&config.smtp_username, &config.smtp_password) {
            (Some(username), Some(password)) => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
                    .port(config.smtp_port)
                    .credentials(Credentials::new(username.clone(), password.clone()))
                    .build()
            }
            _ => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build(),
        };

        Ok(Self { transport })
    }

    fn mailbox(endpoint: &super::MailAddress) -> Result<Mailbox, MailError> {
        let address = endpoint.address.parse::<Address>()?;
        Ok(Mailbox::new(endpoint.name.clone(), address))
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let email = Message::builder()
            .from(Self::mailbox(&message.from)?)
            .to(Self::mailbox(&message.to)?)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html_body.clone())?;

        let response = self.transport.send(email).await?;
        if !response.is_positive() {
            return Err(MailError::Rejected);
        }

        debug!(to = %message.to.address, "Mail delivered to relay");
        Ok(())
    }
}
