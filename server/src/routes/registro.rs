//! Registration relay: validate the school's request and forward it by email.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use wire::{RegistrationRequest, RegistrationResponse};

use super::lectura::INTERNAL_ERROR;
use super::{ApiError, api_error};
use crate::services::registration::{self, RegistrationError};
use crate::state::AppState;

pub(crate) fn registration_error_to_response(err: RegistrationError) -> ApiError {
    match err {
        RegistrationError::Invalid(e) => api_error(StatusCode::BAD_REQUEST, e.to_string()),
        RegistrationError::RateLimited(e) => {
            tracing::warn!(error = %e, "registration rate limited");
            api_error(StatusCode::TOO_MANY_REQUESTS, "Demasiadas solicitudes. Intenta más tarde.")
        }
        RegistrationError::Duplicate => {
            api_error(StatusCode::CONFLICT, "Ya existe una solicitud pendiente para este correo")
        }
        RegistrationError::Mail(e) => {
            tracing::error!(error = %e, "registration email failed");
            api_error(StatusCode::BAD_GATEWAY, "No se pudo enviar la solicitud. Intenta nuevamente.")
        }
        RegistrationError::Database(e) => {
            tracing::error!(error = %e, "registration insert failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// `POST /api/registro`
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<RegistrationRequest>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    registration::submit(
        &state.pool,
        state.mailer(),
        &state.registration_limiter,
        &state.config.registration_inbox,
        &request,
    )
    .await
    .map_err(registration_error_to_response)?;

    Ok(Json(RegistrationResponse { ok: true, error: None }))
}

#[cfg(test)]
#[path = "registro_test.rs"]
mod tests;
