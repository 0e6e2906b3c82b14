use super::*;
use crate::rate_limit::RateLimitError;
use crate::state::test_helpers;

fn request() -> RegistrationRequest {
    RegistrationRequest {
        nombre: "Andrés Pérez".into(),
        correo: "andres@colegio.edu.co".into(),
        celular: "310 555 1234".into(),
        nombre_colegio: "Colegio La Salle".into(),
        cantidad_estudiantes: 320,
    }
}

#[test]
fn validation_error_keeps_field_message() {
    let (status, Json(body)) =
        registration_error_to_response(RegistrationError::Invalid(wire::RegistrationError::PhoneTooShort));
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body.error, "El número debe tener al menos 10 dígitos");
}

#[test]
fn duplicate_is_conflict() {
    assert_eq!(registration_error_to_response(RegistrationError::Duplicate).0, StatusCode::CONFLICT);
}

#[test]
fn rate_limit_is_429() {
    let err = RateLimitError::PerKeyExceeded { limit: 3, window_secs: 3600 };
    assert_eq!(registration_error_to_response(RegistrationError::RateLimited(err)).0, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn submit_rejects_invalid_payload_before_storage() {
    let state = test_helpers::test_app_state();
    let mut bad = request();
    bad.celular = "123".into();

    let (status, _) = submit(State(state), Json(bad)).await.unwrap_err();
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn submit_is_throttled_after_limit() {
    let state = test_helpers::test_app_state();
    let limit = crate::rate_limit::RateLimitConfig::registration_from_env().per_key_limit;
    for _ in 0..limit {
        state.registration_limiter.check_and_record("andres@colegio.edu.co").unwrap();
    }

    let (status, _) = submit(State(state), Json(request())).await.unwrap_err();
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
}
