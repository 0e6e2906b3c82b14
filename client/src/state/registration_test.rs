use super::*;

fn filled() -> RegistrationState {
    let mut s = RegistrationState::default();
    s.input(RegistrationField::Nombre, "Ana Ruiz".into());
    s.input(RegistrationField::Correo, "ana@colegio.edu.co".into());
    s.input(RegistrationField::Celular, "3001234567".into());
    s.input(RegistrationField::Colegio, "Colegio San José".into());
    s.input(RegistrationField::Estudiantes, "250".into());
    s
}

#[test]
fn phone_is_grouped_while_typing() {
    let mut s = RegistrationState::default();
    s.input(RegistrationField::Celular, "3001".into());
    assert_eq!(s.form.celular, "300 1");
    s.input(RegistrationField::Celular, "300-123-4567".into());
    assert_eq!(s.form.celular, "300 123 4567");
}

#[test]
fn blur_shows_and_clears_field_error() {
    let mut s = RegistrationState::default();
    s.input(RegistrationField::Correo, "ana@".into());
    s.blur(RegistrationField::Correo);
    assert_eq!(s.error(RegistrationField::Correo), Some("Por favor ingresa un correo electrónico válido"));

    s.input(RegistrationField::Correo, "ana@colegio.co".into());
    assert_eq!(s.error(RegistrationField::Correo), None);
}

#[test]
fn submit_with_empty_form_marks_every_field() {
    let mut s = RegistrationState::default();
    assert!(s.begin_submit().is_none());
    assert!(!s.submitting);
    for field in RegistrationField::ALL {
        assert!(s.error(field).is_some(), "{field:?}");
    }
}

#[test]
fn valid_submit_enters_submitting_once() {
    let mut s = filled();
    let request = s.begin_submit().unwrap();
    assert_eq!(request.cantidad_estudiantes, 250);
    assert_eq!(request.celular, "300 123 4567");
    assert!(s.submitting);
    assert_eq!(s.button_label(), SUBMITTING_LABEL);
    assert!(s.begin_submit().is_none());
}

#[test]
fn success_resets_form() {
    let mut s = filled();
    s.begin_submit();
    assert_eq!(s.finish_submit(&Ok(())), SUCCESS_MESSAGE);
    assert!(!s.submitting);
    assert_eq!(s.form, RegistrationForm::default());
    assert_eq!(s.button_label(), SUBMIT_LABEL);
}

#[test]
fn failure_keeps_input() {
    let mut s = filled();
    s.begin_submit();
    assert_eq!(s.finish_submit(&Err(ApiError::Timeout)), FAILURE_MESSAGE);
    assert!(!s.submitting);
    assert_eq!(s.form.nombre, "Ana Ruiz");
}
