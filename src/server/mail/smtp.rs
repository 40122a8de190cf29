//! SMTP mailer built on lettre.

use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::authentication::Credentials,
    Address, Message, SmtpTransport, Transport,
};

use crate::server::{
    error::mail::MailError,
    mail::{Mailer, OutgoingEmail},
};

fn parse_address(address: &str) -> Result<Address, MailError> {
    address
        .trim()
        .parse::<Address>()
        .map_err(|source| MailError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

/// Sends multipart plain/html mail through an authenticated SMTP relay.
///
/// lettre's SMTP transport is blocking, so each send runs on the blocking thread pool.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
}

impl SmtpMailer {
    /// Creates a new instance of [`SmtpMailer`]
    ///
    /// # Arguments
    /// - `smtp_server` - Relay host name
    /// - `smtp_port` - Relay port, usually 587
    /// - `smtp_username` / `smtp_password` - Relay credentials
    /// - `from_email` - Sender address
    /// - `from_name` - Optional sender display name
    ///
    /// # Returns
    /// - `Ok(SmtpMailer)` - Mailer ready to send
    /// - `Err(MailError::InvalidAddress)` - Sender address does not parse
    /// - `Err(MailError::Transport)` - Relay could not be configured
    pub fn new(
        smtp_server: &str,
        smtp_port: u16,
        smtp_username: String,
        smtp_password: String,
        from_email: &str,
        from_name: Option<String>,
    ) -> Result<Self, MailError> {
        let transport = SmtpTransport::relay(smtp_server)?
            .port(smtp_port)
            .credentials(Credentials::new(smtp_username, smtp_password))
            .build();

        Ok(Self {
            transport,
            from: Mailbox::new(from_name, parse_address(from_email)?),
        })
    }

    fn build_message(&self, email: OutgoingEmail) -> Result<Message, MailError> {
        let to = Mailbox::new(None, parse_address(&email.to)?);

        Ok(Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject)
            .multipart(MultiPart::alternative_plain_html(
                email.text_body,
                email.html_body,
            ))?)
    }
}

impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), MailError> {
        let recipient = email.to.clone();
        let message = self.build_message(email)?;
        let transport = self.transport.clone();

        tokio::task::spawn_blocking(move || transport.send(&message)).await??;

        tracing::debug!("Delivered email to {}", recipient);

        Ok(())
    }
}
