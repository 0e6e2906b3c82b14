//! Read-state routes: toggle/mark an observation and aggregate counts.
//!
//! All three write endpoints share one handler body; they differ only in the
//! [`ReadAction`] they apply.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use wire::{ReadAction, ReadStateResponse, ReadingListResponse, StatisticsResponse};

use super::auth::AuthUser;
use super::{ApiError, api_error};
use crate::services::reading::{self, ObservationScope, ReadingError};
use crate::state::AppState;

pub(crate) const INTERNAL_ERROR: &str = "Error interno del servidor";

pub(crate) fn reading_error_to_response(err: ReadingError) -> ApiError {
    match err {
        ReadingError::NotFound(_) => api_error(StatusCode::NOT_FOUND, "Observación no encontrada"),
        ReadingError::Forbidden(_) => api_error(StatusCode::FORBIDDEN, "No autorizado"),
        ReadingError::Database(e) => {
            tracing::error!(error = %e, "read state update failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

fn database_error(e: sqlx::Error) -> ApiError {
    tracing::error!(error = %e, "read state query failed");
    api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
}

async fn apply(state: &AppState, auth: &AuthUser, id: i64, action: ReadAction) -> Result<Json<ReadStateResponse>, ApiError> {
    let read = reading::set_read_state(&state.pool, &auth.user, id, action)
        .await
        .map_err(reading_error_to_response)?;
    Ok(Json(ReadStateResponse::changed(id, read)))
}

/// `POST /lectura/toggle_lectura/{id}`
pub async fn toggle(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ReadStateResponse>, ApiError> {
    apply(&state, &auth, id, ReadAction::Toggle).await
}

/// `POST /lectura/marcar_leido/{id}`
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ReadStateResponse>, ApiError> {
    apply(&state, &auth, id, ReadAction::Read).await
}

/// `POST /lectura/marcar_no_leido/{id}`
pub async fn mark_unread(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ReadStateResponse>, ApiError> {
    apply(&state, &auth, id, ReadAction::Unread).await
}

/// `GET /lectura/estadisticas_lectura`: counts over the caller's scope.
pub async fn statistics(State(state): State<AppState>, auth: AuthUser) -> Result<Json<StatisticsResponse>, ApiError> {
    let stats = reading::statistics(&state.pool, ObservationScope::for_user(&auth.user))
        .await
        .map_err(database_error)?;
    Ok(Json(StatisticsResponse { success: true, estadisticas: Some(stats), error: None }))
}

/// `GET /lectura/observaciones`: rows for the read-tracking table.
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> Result<Json<ReadingListResponse>, ApiError> {
    let observaciones = reading::list_for_scope(&state.pool, ObservationScope::for_user(&auth.user))
        .await
        .map_err(database_error)?;
    Ok(Json(ReadingListResponse { success: true, observaciones, error: None }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let (status, Json(body)) = reading_error_to_response(ReadingError::NotFound(7));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Observación no encontrada");
    }

    #[test]
    fn forbidden_maps_to_403() {
        let (status, _) = reading_error_to_response(ReadingError::Forbidden(7));
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn database_error_is_generic_500() {
        let (status, Json(body)) = reading_error_to_response(ReadingError::Database(sqlx::Error::PoolClosed));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, INTERNAL_ERROR);
    }
}
