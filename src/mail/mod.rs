//! Mail dispatch: the asynchronous boundary that delivers contact messages.

mod error;
mod smtp;

use std::time::Duration;

use async_trait::async_trait;

use crate::model::ContactMessage;

pub use error::MailError;
pub use smtp::SmtpMailer;

/// Asynchronous mail delivery boundary.
///
/// The submission controller treats implementations as opaque: success and
/// failure are the only observable outcomes.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one contact message.
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError>;
}

/// Mailer used when no SMTP configuration is present.
///
/// Logs the message and reports success after a short delay, keeping the
/// whole submission lifecycle exercisable without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunMailer;

#[async_trait]
impl Mailer for DryRunMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        tokio::time::sleep(Duration::from_millis(400)).await;
        tracing::info!(
            reply_to = %message.email,
            subject = %message.subject,
            "dry-run send (no SMTP configured)"
        );
        Ok(())
    }
}
