// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RelayError;
use crate::message::{CONTACT_SUBJECT, ContactMessage};
use crate::relay::ContactRelay;
use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Default SMTP port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Connection settings for the SMTP relay.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname.
    pub host: String,
    /// SMTP server port.
    pub port: u16,
    /// Optional SMTP username.
    pub username: Option<String>,
    /// Optional SMTP password.
    pub password: Option<String>,
    /// RFC 5322 "From" address.
    pub sender: String,
    /// Fixed address that receives every contact message.
    pub recipient: String,
}

/// Relays contact messages to a fixed recipient over SMTP.
///
/// The submitter's address is set as the reply-to so a response goes
/// straight back to them.
pub struct SmtpRelay {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
    recipient: Mailbox,
}

impl SmtpRelay {
    /// Creates a relay from connection settings.
    ///
    /// No connection is opened until the first message is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the sender or recipient address is malformed,
    /// or if the TLS parameters for the host cannot be built.
    pub fn new(config: &SmtpConfig) -> Result<Self, RelayError> {
        let sender: Mailbox = config.sender.parse()?;
        let recipient: Mailbox = config.recipient.parse()?;

        let mut transport_builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if let (Some(user), Some(pass)) = (&config.username, &config.password) {
            transport_builder =
                transport_builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(Self {
            transport: transport_builder.build(),
            sender,
            recipient,
        })
    }

    /// Assembles the email for a contact message without sending it.
    ///
    /// # Errors
    ///
    /// Returns an error if the submitter's address is malformed or the
    /// message cannot be built.
    pub fn build_message(&self, message: &ContactMessage) -> Result<Message, RelayError> {
        let reply_to: Mailbox = message.email.trim().parse()?;

        Message::builder()
            .from(self.sender.clone())
            .to(self.recipient.clone())
            .reply_to(reply_to)
            .subject(CONTACT_SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(message.html_body())
            .map_err(|e| RelayError::Build(e.to_string()))
    }
}

#[async_trait]
impl ContactRelay for SmtpRelay {
    async fn relay(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let email: Message = self.build_message(message)?;
        self.transport.send(email).await?;

        tracing::info!(
            reply_to = %message.email,
            recipient = %self.recipient,
            "Contact message relayed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}
