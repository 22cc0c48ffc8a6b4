//! Mail module - the mail transport collaborator boundary.
//!
//! Handlers build a [`MailMessage`] (via [`templates`]) and hand it to the
//! [`MailTransport`] held in the application state. Production wires in the
//! SMTP implementation; development and tests wire in the in-memory one.

pub mod memory;
pub mod smtp;
pub mod templates;

pub use memory::MemoryMailer;
pub use smtp::SmtpMailer;

use async_trait::async_trait;
use thiserror::Error;

/// A mail endpoint: optional display name plus address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailAddress {
    pub name: Option<String>,
    pub address: String,
}

impl MailAddress {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            address: address.into(),
        }
    }

    pub fn bare(address: impl Into<String>) -> Self {
        Self {
            name: None,
            address: address.into(),
        }
    }
}

/// A structured outgoing message. The body is plain HTML.
#[derive(Debug, Clone)]
pub struct MailMessage {
    pub from: MailAddress,
    pub to: MailAddress,
    pub subject: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("mail transport rejected the message")]
    Rejected,
}

/// Attempts delivery of a single message. Send failures surface as
/// [`MailError`]; whether that fails the surrounding operation is the
/// caller's decision.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;
}
