//! MemoryMailer - recording transport for development and tests
//!
//! Messages are kept in-process and a preview line is logged per message,
//! so the development flow can follow confirmation links without a relay.

use super::{MailError, MailMessage, MailTransport};
use async_trait::async_trait;
use std::sync::Mutex;
use tracing::info;

pub struct MemoryMailer {
    sent: Mutex<Vec<MailMessage>>,
    fail_sends: bool,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: false,
        }
    }

    /// A mailer whose every send fails, for exercising dispatch-failure
    /// paths in tests.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: true,
        }
    }

    /// Snapshot of every message accepted so far, in send order.
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().expect("mailer lock poisoned").clone()
    }
}

impl Default for MemoryMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for MemoryMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        if self.fail_sends {
            return Err(MailError::Rejected);
        }

        info!(
            to = %message.to.address,
            subject = %message.subject,
            "Mail preview (memory driver): {}",
            message.html_body
        );

        self.sent
            .lock()
            .expect("mailer lock poisoned")
            .push(message.clone());

        Ok(())
    }
}
