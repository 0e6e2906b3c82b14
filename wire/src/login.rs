//! Login identifiers and access-code bodies.
//!
//! A user signs in with one of three identifiers on file (email address,
//! cédula or PPT number) and receives a one-time code at the email address of
//! that account. The identifier rules live here so the login form and the
//! server reject the same inputs.

use serde::{Deserialize, Serialize};

use crate::registration::is_valid_email;

/// Which identifier the user typed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMethod {
    #[default]
    Correo,
    Cedula,
    Ppt,
}

impl LoginMethod {
    pub const ALL: [Self; 3] = [Self::Correo, Self::Cedula, Self::Ppt];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correo => "correo",
            Self::Cedula => "cedula",
            Self::Ppt => "ppt",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == raw)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Correo => "Correo electrónico",
            Self::Cedula => "Cédula",
            Self::Ppt => "PPT",
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Correo => "tu@correo.com",
            Self::Cedula => "1234567890",
            Self::Ppt => "PPT123456789",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Por favor, completa todos los campos.")]
    MissingFields,
    #[error("El formato del documento ingresado no es válido.")]
    InvalidFormat,
}

/// A validated identifier in its canonical stored form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginIdentifier {
    pub method: LoginMethod,
    pub value: String,
}

impl LoginIdentifier {
    /// Emails are lowercased, PPT numbers uppercased, cédulas kept as digits.
    ///
    /// # Errors
    ///
    /// [`LoginError::MissingFields`] for blank input, otherwise
    /// [`LoginError::InvalidFormat`] when the value does not fit the method.
    pub fn parse(method: LoginMethod, raw: &str) -> Result<Self, LoginError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(LoginError::MissingFields);
        }
        let value = match method {
            LoginMethod::Correo => trimmed.to_lowercase(),
            LoginMethod::Cedula => trimmed.to_owned(),
            LoginMethod::Ppt => trimmed.to_ascii_uppercase(),
        };
        let valid = match method {
            LoginMethod::Correo => is_valid_email(&value),
            LoginMethod::Cedula => is_digits(&value, 6..=10),
            LoginMethod::Ppt => value.strip_prefix("PPT").is_some_and(|rest| is_digits(rest, 9..=12)),
        };
        if valid { Ok(Self { method, value }) } else { Err(LoginError::InvalidFormat) }
    }

    /// Key used for per-identifier rate limiting.
    #[must_use]
    pub fn limiter_key(&self) -> String {
        format!("{}:{}", self.method.as_str(), self.value)
    }
}

fn is_digits(s: &str, len: std::ops::RangeInclusive<usize>) -> bool {
    len.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

/// `POST /api/auth/code/request`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRequest {
    #[serde(default)]
    pub login_method: LoginMethod,
    pub usuario: String,
}

/// `POST /api/auth/code/verify`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeVerify {
    #[serde(default)]
    pub login_method: LoginMethod,
    pub usuario: String,
    pub code: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRequestResponse {
    pub ok: bool,
    /// Present only when the server echoes codes for local development.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Successful verification: where the user's role lands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub redirect: String,
    pub nombre: String,
}

#[cfg(test)]
#[path = "login_test.rs"]
mod tests;
