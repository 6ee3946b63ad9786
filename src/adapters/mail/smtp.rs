//! SMTP mail adapter using lettre. Implements MailPort.

use crate::domain::{DomainError, Mail};
use crate::ports::MailPort;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

/// Mailer speaking SMTP with STARTTLS.
pub struct SmtpMailer {
    host: String,
    port: u16,
    credentials: Credentials,
    from: String,
}

impl SmtpMailer {
    /// Create a new SMTP mailer.
    ///
    /// # Arguments
    /// * `host` - SMTP relay host (e.g. smtp.gmail.com)
    /// * `port` - submission port, normally 587
    /// * `username`/`password` - relay credentials
    /// * `from` - sender address for all outgoing mail
    pub fn new(host: String, port: u16, username: String, password: String, from: String) -> Self {
        Self {
            host,
            port,
            credentials: Credentials::new(username, password),
            from,
        }
    }
}

#[async_trait::async_trait]
impl MailPort for SmtpMailer {
    async fn send(&self, mail: &Mail) -> Result<(), DomainError> {
        let from: Mailbox = self
            .from
            .parse()
            .map_err(|e| DomainError::Mail(format!("Invalid from address: {}", e)))?;
        let to: Mailbox = mail
            .to
            .parse()
            .map_err(|e| DomainError::Mail(format!("Invalid to address: {}", e)))?;

        let mut builder = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.clone());
        if let Some(cc) = &mail.cc {
            let cc: Mailbox = cc
                .parse()
                .map_err(|e| DomainError::Mail(format!("Invalid cc address: {}", e)))?;
            builder = builder.cc(cc);
        }
        let email = builder
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .map_err(|e| DomainError::Mail(format!("Failed to build message: {}", e)))?;

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.host)
                .map_err(|e| DomainError::Mail(format!("Failed to create transport: {}", e)))?
                .port(self.port)
                .credentials(self.credentials.clone())
                .build();

        mailer
            .send(email)
            .await
            .map_err(|e| DomainError::Mail(format!("SMTP send failed: {}", e)))?;

        info!(to = %mail.to, subject = %mail.subject, "email sent");
        Ok(())
    }
}
