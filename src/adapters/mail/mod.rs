//! Mail adapters. Implement MailPort.

pub mod log_mailer;
pub mod smtp;

pub use log_mailer::LogMailer;
pub use smtp::SmtpMailer;
