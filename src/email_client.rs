use anyhow::Context;
use lettre::message::MultiPart;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::configuration::EmailSettings;
use crate::dispatch::DispatchOutcome;

/// A rendered message, ready to hand to the transport.
pub struct OutgoingEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub struct EmailClient {
    transport: MailTransport,
}

enum MailTransport {
    Configured(AsyncSmtpTransport<Tokio1Executor>),
    NotConfigured,
}

impl EmailClient {
    pub fn from_settings(settings: &EmailSettings) -> Result<Self, anyhow::Error> {
        let transport = match &settings.smtp {
            Some(smtp) => {
                let credentials = Credentials::new(
                    smtp.username.clone(),
                    smtp.password.expose_secret().clone(),
                );
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)
                    .context("Failed to build the SMTP transport.")?
                    .port(smtp.port)
                    .credentials(credentials)
                    .timeout(Some(settings.timeout()))
                    .build();
                MailTransport::Configured(transport)
            }
            None => MailTransport::NotConfigured,
        };

        Ok(Self { transport })
    }

    /// Send a multipart (plain + HTML) message.
    ///
    /// With no SMTP credentials configured this resolves to
    /// `DispatchOutcome::Skipped`: email delivery is a best-effort
    /// enhancement, never a hard dependency of an intake.
    pub async fn send(
        &self,
        from: &str,
        reply_to: Option<&str>,
        recipient: &str,
        email: &OutgoingEmail,
    ) -> Result<DispatchOutcome, anyhow::Error> {
        let transport = match &self.transport {
            MailTransport::Configured(transport) => transport,
            MailTransport::NotConfigured => {
                tracing::warn!("SMTP not configured - skipping email delivery.");
                return Ok(DispatchOutcome::Skipped);
            }
        };

        let mut builder = Message::builder()
            .from(from.parse().context("Invalid sender address.")?)
            .to(recipient.parse().context("Invalid recipient address.")?)
            .subject(email.subject.clone());
        if let Some(reply_to) = reply_to {
            builder = builder.reply_to(reply_to.parse().context("Invalid reply-to address.")?);
        }
        let message = builder
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))
            .context("Failed to assemble the email message.")?;

        transport
            .send(message)
            .await
            .context("Failed to deliver the email over SMTP.")?;

        Ok(DispatchOutcome::Delivered)
    }
}
