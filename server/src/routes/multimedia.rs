//! Multimedia route: attachments of one observation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use wire::MultimediaResponse;

use super::auth::AuthUser;
use super::lectura::INTERNAL_ERROR;
use super::{ApiError, api_error};
use crate::services::multimedia::{self, MultimediaError};
use crate::services::reading::ObservationScope;
use crate::state::AppState;

pub(crate) fn multimedia_error_to_response(err: MultimediaError) -> ApiError {
    match err {
        MultimediaError::NotFound(_) => api_error(StatusCode::NOT_FOUND, "Observación no encontrada"),
        MultimediaError::Forbidden(_) => api_error(StatusCode::FORBIDDEN, "No autorizado"),
        MultimediaError::Database(e) => {
            tracing::error!(error = %e, "multimedia query failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
        }
    }
}

/// `GET /api/observaciones/{id}/multimedia`
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MultimediaResponse>, ApiError> {
    let data = multimedia::list_for_observation(&state.pool, ObservationScope::for_user(&auth.user), id)
        .await
        .map_err(multimedia_error_to_response)?;
    Ok(Json(MultimediaResponse { success: true, data, error: None }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_map_to_statuses() {
        assert_eq!(multimedia_error_to_response(MultimediaError::NotFound(1)).0, StatusCode::NOT_FOUND);
        assert_eq!(multimedia_error_to_response(MultimediaError::Forbidden(1)).0, StatusCode::FORBIDDEN);
        assert_eq!(
            multimedia_error_to_response(MultimediaError::Database(sqlx::Error::PoolClosed)).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
