use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::MailConfig;
use crate::mail::{MailError, Mailer};
use crate::model::ContactMessage;

/// Delivers contact messages over SMTP.
///
/// Every message goes to the configured inbox; the visitor's address is
/// carried as `Reply-To` so answering lands in the right place.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> Result<Self, MailError> {
        let transport = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            let credentials = Credentials::new(
                config.smtp_username.clone(),
                config.smtp_password.clone(),
            );
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(credentials)
                .build()
        };

        Ok(SmtpMailer {
            transport,
            from: config.from_address.parse()?,
            to: config.to_address.parse()?,
        })
    }

    fn build_message(&self, message: &ContactMessage) -> Result<Message, MailError> {
        let reply_to = Mailbox::new(Some(message.name.clone()), message.email.parse()?);

        Ok(Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(message.subject_line())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body())?)
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let email = self.build_message(message)?;
        self.transport.send(email).await?;
        tracing::info!(reply_to = %message.email, "contact message delivered");
        Ok(())
    }
}
