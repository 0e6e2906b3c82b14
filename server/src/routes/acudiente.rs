//! Guardian routes: children list and per-child observations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use wire::{ChildObservations, ChildrenResponse};

use super::auth::GuardianUser;
use super::lectura::INTERNAL_ERROR;
use super::{ApiError, api_error};
use crate::services::observation::{self, ObservationError};
use crate::services::student;
use crate::state::AppState;

pub(crate) fn observation_error_to_response(err: ObservationError) -> ApiError {
    match err {
        ObservationError::NotOwned(child_id) => {
            tracing::warn!(child_id, "observations requested for a student outside the guardian");
            api_error(StatusCode::FORBIDDEN, "Estudiante no encontrado o no autorizado")
        }
        ObservationError::Database(e) => {
            tracing::error!(error = %e, "observation query failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// `GET /acudiente/api/hijos` (and the legacy `hijos-temp` alias).
pub async fn children(State(state): State<AppState>, GuardianUser(user): GuardianUser) -> Result<Json<ChildrenResponse>, ApiError> {
    let hijos = student::list_children(&state.pool, user.id).await.map_err(|e| {
        tracing::error!(error = %e, "children query failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
    })?;
    tracing::debug!(guardian_id = %user.id, count = hijos.len(), "children listed");
    Ok(Json(ChildrenResponse { hijos }))
}

/// `GET /acudiente/api/observaciones/{child_id}`
pub async fn observations(
    State(state): State<AppState>,
    GuardianUser(user): GuardianUser,
    Path(child_id): Path<i64>,
) -> Result<Json<ChildObservations>, ApiError> {
    observation::for_child(&state.pool, user.id, child_id)
        .await
        .map(Json)
        .map_err(observation_error_to_response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_owned_is_forbidden_with_spanish_message() {
        let (status, Json(body)) = observation_error_to_response(ObservationError::NotOwned(3));
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error, "Estudiante no encontrado o no autorizado");
    }

    #[test]
    fn database_failure_is_500() {
        let (status, _) = observation_error_to_response(ObservationError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
