//! Log-only mail adapter. Wired when SMTP is not configured.

use crate::domain::{DomainError, Mail};
use crate::ports::MailPort;
use tracing::info;

/// Mailer that records the mail in the log instead of sending it.
#[derive(Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl MailPort for LogMailer {
    async fn send(&self, mail: &Mail) -> Result<(), DomainError> {
        info!(
            to = %mail.to,
            subject = %mail.subject,
            body = %mail.body,
            "[LOG-ONLY] SMTP not configured, mail not dispatched"
        );
        Ok(())
    }
}
