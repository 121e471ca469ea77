use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::{Message, SmtpTransport, Transport};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::data_structs::app_config::SmtpSettings;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

pub fn is_valid_email(address: &str) -> bool {
    EMAIL_PATTERN.is_match(address)
}

/// Outcome of a dispatch attempt. Validation variants are recoverable by the
/// caller (mapped to 4xx upstream); `Transport` covers everything that went
/// wrong on the wire (connect, TLS upgrade, authentication, send).
#[derive(Debug, PartialEq, Eq)]
#[derive(Error)]
pub enum DispatchError {
    #[error("Invalid recipient email address")]
    InvalidRecipient,
    #[error("Invalid sender email address")]
    InvalidSender,
    #[error("Missing required SMTP credentials")]
    MissingCredentials,
    #[error("SMTP transport error: {0}")]
    Transport(String),
}

impl DispatchError {
    pub fn is_validation(&self) -> bool {
        !matches!(self, DispatchError::Transport(_))
    }
}

/// The seam between message composition and the actual SMTP session. Tests
/// swap in a recording stub; production uses [`SmtpMailer`].
pub trait Mailer: Send + Sync {
    fn deliver(&self, settings: &SmtpSettings, message: &Message) -> Result<(), DispatchError>;
}

/// Opens one STARTTLS-upgraded SMTP session per delivery. A fresh transport
/// is built per call and dropped when this returns, so the connection is torn
/// down on every exit path, success or failure.
pub struct SmtpMailer;

impl Mailer for SmtpMailer {
    fn deliver(&self, settings: &SmtpSettings, message: &Message) -> Result<(), DispatchError> {
        let creds = Credentials::new(settings.username.clone(), settings.password.clone());
        let transport = SmtpTransport::starttls_relay(&settings.server)
            .map_err(|e| DispatchError::Transport(e.to_string()))?
            .port(settings.port)
            .credentials(creds)
            .authentication(vec![Mechanism::Plain])
            .build();

        match transport.send(message) {
            Ok(_) => Ok(()),
            Err(e) => Err(DispatchError::Transport(e.to_string())),
        }
    }
}

pub struct MailDispatcher<'a> {
    mailer: &'a dyn Mailer,
}

impl<'a> MailDispatcher<'a> {
    pub fn new(mailer: &'a dyn Mailer) -> MailDispatcher<'a> {
        return MailDispatcher { mailer };
    }

    /// Validates the recipient and credentials, composes a single-part
    /// plain-text message, and hands it to the mailer. No network I/O happens
    /// unless both validation steps pass.
    pub fn send(
        &self,
        recipient: &str,
        subject: &str,
        content: &str,
        settings: &SmtpSettings,
    ) -> Result<(), DispatchError> {
        if !is_valid_email(recipient) {
            return Err(DispatchError::InvalidRecipient);
        }

        if settings.username.is_empty()
            || settings.password.is_empty()
            || settings.server.is_empty()
        {
            return Err(DispatchError::MissingCredentials);
        }

        // the authenticating account is also the From header
        let from: Mailbox = settings
            .username
            .parse()
            .map_err(|_| DispatchError::InvalidSender)?;
        let to: Mailbox = recipient
            .parse()
            .map_err(|_| DispatchError::InvalidRecipient)?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(content.to_string())
            .map_err(|e| DispatchError::Transport(e.to_string()))?;

        return self.mailer.deliver(settings, &message);
    }
}
