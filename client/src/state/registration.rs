//! Registration form state.
//!
//! Field values and rules live in [`RegistrationForm`]; this adds the
//! per-field error display and the in-flight submit flag.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::collections::HashMap;

use crate::net::api::ApiError;
use crate::net::types::RegistrationRequest;
use wire::registration::{format_phone, RegistrationField, RegistrationForm};

pub const SUBMIT_LABEL: &str = "Enviar Solicitud";
pub const SUBMITTING_LABEL: &str = "Enviando...";
pub const SUCCESS_MESSAGE: &str = "¡Gracias por registrarte! Te contactaremos pronto.";
pub const FAILURE_MESSAGE: &str = "Hubo un error al enviar tu solicitud. Por favor, intenta de nuevo más tarde.";

#[derive(Clone, Debug, Default)]
pub struct RegistrationState {
    pub form: RegistrationForm,
    errors: HashMap<RegistrationField, String>,
    pub submitting: bool,
}

impl RegistrationState {
    /// Store typed input. The phone is regrouped as the user types; an
    /// existing error on the field is re-checked so it clears once fixed.
    pub fn input(&mut self, field: RegistrationField, value: String) {
        let value = if field == RegistrationField::Celular { format_phone(&value) } else { value };
        self.form.set(field, value);
        if self.errors.contains_key(&field) {
            self.blur(field);
        }
    }

    /// Validate one field when it loses focus.
    pub fn blur(&mut self, field: RegistrationField) {
        match self.form.check(field) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e.to_string());
            }
        }
    }

    #[must_use]
    pub fn error(&self, field: RegistrationField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Validate everything and enter the submitting state.
    ///
    /// Returns the request to send, or `None` when a field is invalid (all
    /// field errors are then shown) or a submit is already in flight.
    pub fn begin_submit(&mut self) -> Option<RegistrationRequest> {
        if self.submitting {
            return None;
        }
        self.errors = self.form.errors().into_iter().map(|e| (e.field(), e.to_string())).collect();
        let request = self.form.validate().ok()?;
        self.submitting = true;
        Some(request)
    }

    /// Leave the submitting state. Success clears the form.
    ///
    /// Returns the message for the toast.
    pub fn finish_submit(&mut self, result: &Result<(), ApiError>) -> &'static str {
        self.submitting = false;
        if result.is_ok() {
            self.form = RegistrationForm::default();
            self.errors.clear();
            SUCCESS_MESSAGE
        } else {
            FAILURE_MESSAGE
        }
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.submitting { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }
}
