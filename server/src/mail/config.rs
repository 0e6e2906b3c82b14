//! Mail configuration parsed from environment variables.

use super::MailError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub api_key: String,
    pub from: String,
}

impl MailConfig {
    /// Build typed mail config from environment variables.
    ///
    /// Required:
    /// - `RESEND_API_KEY`
    /// - `RESEND_FROM`: sender address, e.g. `Teaching Notes <no-reply@example.com>`
    ///
    /// # Errors
    ///
    /// Returns [`MailError::MissingConfig`] naming the first absent variable.
    pub fn from_env() -> Result<Self, MailError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, MailError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, "RESEND_API_KEY")?;
        let from = required(&lookup, "RESEND_FROM")?;
        if !from.contains('@') {
            return Err(MailError::InvalidConfig(format!("RESEND_FROM is not an address: {from}")));
        }
        Ok(Self { api_key, from })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String, MailError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| MailError::MissingConfig { var: key.to_owned() })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
