//! School registration requests.
//!
//! DESIGN
//! ======
//! `RegistrationForm` is the raw text the user typed; `validate` turns it into
//! a `RegistrationRequest` whose fields are known-good. The browser runs the
//! same rules per field while the user types, and the server runs them again
//! on submit.

use serde::{Deserialize, Serialize};

pub const PHONE_DIGITS: usize = 10;
pub const MIN_STUDENTS: u32 = 1;
pub const MAX_STUDENTS: u32 = 9999;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationField {
    Nombre,
    Correo,
    Celular,
    Colegio,
    Estudiantes,
}

impl RegistrationField {
    pub const ALL: [Self; 5] = [Self::Nombre, Self::Correo, Self::Celular, Self::Colegio, Self::Estudiantes];
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("Este campo es obligatorio")]
    Missing(RegistrationField),
    #[error("Por favor ingresa un correo electrónico válido")]
    InvalidEmail,
    #[error("El número debe tener al menos 10 dígitos")]
    PhoneTooShort,
    #[error("Por favor ingresa un número válido")]
    StudentCountNotNumber,
    #[error("Debe ser al menos 1 estudiante")]
    TooFewStudents,
    #[error("El número máximo es 9999 estudiantes")]
    TooManyStudents,
}

impl RegistrationError {
    /// Field the error should be displayed under.
    #[must_use]
    pub fn field(&self) -> RegistrationField {
        match self {
            Self::Missing(field) => *field,
            Self::InvalidEmail => RegistrationField::Correo,
            Self::PhoneTooShort => RegistrationField::Celular,
            Self::StudentCountNotNumber | Self::TooFewStudents | Self::TooManyStudents => {
                RegistrationField::Estudiantes
            }
        }
    }
}

/// Raw form input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub nombre: String,
    pub correo: String,
    pub celular: String,
    pub colegio: String,
    pub estudiantes: String,
}

/// Validated registration, as sent to `POST /api/registro` and stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub nombre: String,
    pub correo: String,
    /// Formatted `XXX XXX XXXX`.
    pub celular: String,
    pub nombre_colegio: String,
    pub cantidad_estudiantes: u32,
}

/// Response of `POST /api/registro`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    #[serde(default)]
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RegistrationForm {
    #[must_use]
    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Nombre => &self.nombre,
            RegistrationField::Correo => &self.correo,
            RegistrationField::Celular => &self.celular,
            RegistrationField::Colegio => &self.colegio,
            RegistrationField::Estudiantes => &self.estudiantes,
        }
    }

    pub fn set(&mut self, field: RegistrationField, value: String) {
        let slot = match field {
            RegistrationField::Nombre => &mut self.nombre,
            RegistrationField::Correo => &mut self.correo,
            RegistrationField::Celular => &mut self.celular,
            RegistrationField::Colegio => &mut self.colegio,
            RegistrationField::Estudiantes => &mut self.estudiantes,
        };
        *slot = value;
    }

    /// Check one field in isolation.
    ///
    /// # Errors
    ///
    /// Returns the first rule the field breaks.
    pub fn check(&self, field: RegistrationField) -> Result<(), RegistrationError> {
        let raw = self.value(field).trim();
        if raw.is_empty() {
            return Err(RegistrationError::Missing(field));
        }
        match field {
            RegistrationField::Nombre | RegistrationField::Colegio => Ok(()),
            RegistrationField::Correo => {
                if is_valid_email(raw) {
                    Ok(())
                } else {
                    Err(RegistrationError::InvalidEmail)
                }
            }
            RegistrationField::Celular => {
                if phone_digits(raw).len() == PHONE_DIGITS {
                    Ok(())
                } else {
                    Err(RegistrationError::PhoneTooShort)
                }
            }
            RegistrationField::Estudiantes => parse_student_count(raw).map(|_| ()),
        }
    }

    /// Every field error, in form order.
    #[must_use]
    pub fn errors(&self) -> Vec<RegistrationError> {
        RegistrationField::ALL
            .iter()
            .filter_map(|field| self.check(*field).err())
            .collect()
    }

    /// Validate the whole form.
    ///
    /// # Errors
    ///
    /// Returns the first error in form order.
    pub fn validate(&self) -> Result<RegistrationRequest, RegistrationError> {
        for field in RegistrationField::ALL {
            self.check(field)?;
        }
        Ok(RegistrationRequest {
            nombre: self.nombre.trim().to_owned(),
            correo: self.correo.trim().to_ascii_lowercase(),
            celular: format_phone(&self.celular),
            nombre_colegio: self.colegio.trim().to_owned(),
            cantidad_estudiantes: parse_student_count(self.estudiantes.trim())?,
        })
    }
}

impl RegistrationRequest {
    /// Re-run the form rules over an already-built request.
    ///
    /// # Errors
    ///
    /// Returns the first broken rule.
    pub fn revalidate(&self) -> Result<Self, RegistrationError> {
        RegistrationForm {
            nombre: self.nombre.clone(),
            correo: self.correo.clone(),
            celular: self.celular.clone(),
            colegio: self.nombre_colegio.clone(),
            estudiantes: self.cantidad_estudiantes.to_string(),
        }
        .validate()
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // At least one dot with non-empty text on both sides.
    domain
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .any(|(idx, _)| idx > 0 && idx + 1 < domain.len())
}

/// Digits of a phone number, capped at ten.
#[must_use]
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(PHONE_DIGITS).collect()
}

/// Group phone digits as `XXX XXX XXXX`, formatting partial input as typed.
#[must_use]
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);
    match digits.len() {
        0..3 => digits,
        3..6 => format!("{} {}", &digits[..3], &digits[3..]),
        _ => format!("{} {} {}", &digits[..3], &digits[3..6], &digits[6..]),
    }
}

/// Parse and range-check the student count.
///
/// # Errors
///
/// Returns an error for non-numeric input or a value outside `1..=9999`.
pub fn parse_student_count(raw: &str) -> Result<u32, RegistrationError> {
    let value: i64 = raw.trim().parse().map_err(|_| RegistrationError::StudentCountNotNumber)?;
    if value < i64::from(MIN_STUDENTS) {
        return Err(RegistrationError::TooFewStudents);
    }
    if value > i64::from(MAX_STUDENTS) {
        return Err(RegistrationError::TooManyStudents);
    }
    u32::try_from(value).map_err(|_| RegistrationError::TooManyStudents)
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
