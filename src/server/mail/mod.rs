//! Outbound email port.
//!
//! Services depend on the [`Mailer`] trait rather than a transport so the opening notifier can
//! be exercised without an SMTP server. [`smtp::SmtpMailer`] is the production adapter.

pub mod smtp;

use std::future::Future;

use crate::server::error::mail::MailError;

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

/// Delivers rendered emails.
pub trait Mailer: Send + Sync {
    /// Send one email.
    ///
    /// # Returns
    /// - `Ok(())` - The transport accepted the message
    /// - `Err(MailError)` - Address, message or transport failure
    fn send(&self, email: OutgoingEmail) -> impl Future<Output = Result<(), MailError>> + Send;
}
