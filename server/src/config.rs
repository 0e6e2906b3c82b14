//! Portal settings parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_UPLOADS_DIR: &str = "./uploads";
pub const DEFAULT_REGISTRATION_INBOX: &str = "teachingnote7@gmail.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Root directory served under `/uploads`.
    pub uploads_dir: PathBuf,
    /// Address that receives registration requests.
    pub registration_inbox: String,
    /// Return login codes in the response body (development only).
    pub echo_login_codes: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            uploads_dir: PathBuf::from(DEFAULT_UPLOADS_DIR),
            registration_inbox: DEFAULT_REGISTRATION_INBOX.to_owned(),
            echo_login_codes: false,
        }
    }
}

impl PortalConfig {
    /// Optional:
    /// - `UPLOADS_DIR`: default `./uploads`
    /// - `REGISTRATION_NOTIFY_TO`: default `teachingnote7@gmail.com`
    /// - `EMAIL_AUTH_ECHO_CODE`: default `false`
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        Self {
            uploads_dir: non_empty("UPLOADS_DIR").map_or(defaults.uploads_dir, PathBuf::from),
            registration_inbox: non_empty("REGISTRATION_NOTIFY_TO").unwrap_or(defaults.registration_inbox),
            echo_login_codes: non_empty("EMAIL_AUTH_ECHO_CODE")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.echo_login_codes),
        }
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read an environment flag with [`parse_bool`] semantics.
pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|raw| parse_bool(&raw))
}

/// Read and parse an environment value, falling back to `default`.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
