//! Transactional email delivery.
//!
//! DESIGN
//! ======
//! Services depend on the [`Mailer`] trait, never on the provider client, so
//! tests swap in a recording mock. [`ResendMailer`] is the production
//! implementation and is built from [`config::MailConfig`].
//!
//! TRADE-OFFS
//! ==========
//! Mail is optional: when `RESEND_*` variables are absent the server starts
//! without a mailer and the features that need one degrade (login codes are
//! only echoed, registration requests are stored but not forwarded).

pub mod config;

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use config::MailConfig;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("missing mail configuration: {var}")]
    MissingConfig { var: String },
    #[error("invalid mail configuration: {0}")]
    InvalidConfig(String),
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// A rendered message ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Provider-neutral email sender. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Delivery`] if the provider rejects the message.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Resend-backed mailer.
pub struct ResendMailer {
    client: Resend,
    from: String,
}

impl ResendMailer {
    /// Build a mailer from `RESEND_API_KEY` / `RESEND_FROM`.
    ///
    /// # Errors
    ///
    /// Returns an error if either variable is missing or malformed.
    pub fn from_env() -> Result<Self, MailError> {
        Ok(Self::from_config(MailConfig::from_env()?))
    }

    #[must_use]
    pub fn from_config(config: MailConfig) -> Self {
        Self { client: Resend::new(&config.api_key), from: config.from }
    }

    #[must_use]
    pub fn sender(&self) -> &str {
        &self.from
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let to = [email.to.as_str()];
        let message = CreateEmailBaseOptions::new(&self.from, to, &email.subject).with_html(&email.html);
        self.client
            .emails
            .send(message)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }
}

/// Escape text for interpolation into an HTML template.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
