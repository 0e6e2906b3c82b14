//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A body carrying a non-empty
//! `error` field is a server-reported failure even on a 2xx status, so all
//! responses go through [`decode_body`] before reaching callers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::types::{
    Child, ChildObservations, CodeRequest, CodeVerify, MultimediaAsset, ReadAction, ReadStatistics, ReadingRow,
    RegistrationRequest, User,
};
#[cfg(any(test, feature = "hydrate"))]
use wire::{MultimediaResponse, ReadStateResponse, ReadingListResponse, StatisticsResponse};

/// Abort the children request after this long.
pub const CHILDREN_TIMEOUT_MS: u32 = 10_000;

#[cfg(any(test, feature = "hydrate"))]
const CHILDREN_ENDPOINT: &str = "/acudiente/api/hijos-temp";
#[cfg(any(test, feature = "hydrate"))]
const STATISTICS_ENDPOINT: &str = "/lectura/estadisticas_lectura";
#[cfg(any(test, feature = "hydrate"))]
const READING_LIST_ENDPOINT: &str = "/lectura/observaciones";
#[cfg(any(test, feature = "hydrate"))]
const REGISTRATION_ENDPOINT: &str = "/api/registro";

/// Failure of a portal API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Error de conexión")]
    Network(String),
    /// The children request exceeded [`CHILDREN_TIMEOUT_MS`].
    #[error("Tiempo de espera agotado")]
    Timeout,
    /// The server answered with an `error` message or `success: false`.
    #[error("{0}")]
    Server(String),
    #[error("Respuesta inválida del servidor")]
    Decode(String),
    /// Called during SSR.
    #[error("no disponible en el servidor")]
    Unavailable,
}

impl ApiError {
    /// Whether the failure means the server could not be reached at all.
    #[must_use]
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }
}

// =============================================================================
// ENDPOINTS + RESPONSE INTERPRETATION
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn child_observations_endpoint(child_id: i64) -> String {
    format!("/acudiente/api/observaciones/{child_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn multimedia_endpoint(observation_id: i64) -> String {
    format!("/api/observaciones/{observation_id}/multimedia")
}

/// Decode a response body.
///
/// A non-empty top-level `error` string wins over the status; otherwise a
/// non-2xx status is reported with its code.
#[cfg(any(test, feature = "hydrate"))]
fn decode_body<T: DeserializeOwned>(ok: bool, status: u16, text: &str) -> Result<T, ApiError> {
    let value: Option<serde_json::Value> = serde_json::from_str(text).ok();
    if let Some(message) = value
        .as_ref()
        .and_then(|v| v.get("error"))
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.trim().is_empty())
    {
        return Err(ApiError::Server(message.to_owned()));
    }
    if !ok {
        return Err(ApiError::Server(format!("Error del servidor: {status}")));
    }
    let value = value.ok_or_else(|| ApiError::Decode("body is not JSON".to_owned()))?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Fallback message when a read-state call fails without one.
#[cfg(any(test, feature = "hydrate"))]
fn read_state_failure_message(action: ReadAction) -> &'static str {
    match action {
        ReadAction::Toggle => "Error al cambiar estado",
        ReadAction::Read => "Error al marcar como leído",
        ReadAction::Unread => "Error al marcar como no leído",
    }
}

/// Confirmed read flag after a read-state call.
///
/// `Toggle` trusts the server's `leido`; explicit actions confirm what was
/// requested.
#[cfg(any(test, feature = "hydrate"))]
fn read_state_outcome(action: ReadAction, resp: ReadStateResponse) -> Result<ReadStateChange, ApiError> {
    if !resp.success {
        let message = resp.error.unwrap_or_else(|| read_state_failure_message(action).to_owned());
        return Err(ApiError::Server(message));
    }
    let read = match action {
        ReadAction::Toggle => resp
            .leido
            .ok_or_else(|| ApiError::Decode("toggle response without leido".to_owned()))?,
        ReadAction::Read => true,
        ReadAction::Unread => false,
    };
    Ok(ReadStateChange { read, message: resp.message })
}

#[cfg(any(test, feature = "hydrate"))]
fn statistics_outcome(resp: StatisticsResponse) -> Result<ReadStatistics, ApiError> {
    match (resp.success, resp.estadisticas) {
        (true, Some(stats)) => Ok(stats),
        (true, None) => Err(ApiError::Decode("statistics missing".to_owned())),
        (false, _) => Err(ApiError::Server(
            resp.error.unwrap_or_else(|| "Error al obtener estadísticas".to_owned()),
        )),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn multimedia_outcome(resp: MultimediaResponse) -> Result<Vec<MultimediaAsset>, ApiError> {
    if resp.success {
        Ok(resp.data)
    } else {
        Err(ApiError::Server(resp.error.unwrap_or_else(|| "Error al cargar multimedia".to_owned())))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn reading_list_outcome(resp: ReadingListResponse) -> Result<Vec<ReadingRow>, ApiError> {
    if resp.success {
        Ok(resp.observaciones)
    } else {
        Err(ApiError::Server(resp.error.unwrap_or_else(|| "Error al cargar observaciones".to_owned())))
    }
}

/// Confirmed result of a read-state request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadStateChange {
    pub read: bool,
    /// Server confirmation text, shown as a success toast.
    pub message: Option<String>,
}

// =============================================================================
// TRANSPORT (hydrate only)
// =============================================================================

#[cfg(feature = "hydrate")]
async fn read_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_body(ok, status, &text)
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<T: DeserializeOwned>(url: &str, payload: Option<&serde_json::Value>) -> Result<T, ApiError> {
    let builder = gloo_net::http::Request::post(url);
    let resp = match payload {
        Some(body) => builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?.send().await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Request a login code via `POST /api/auth/code/request`.
///
/// Returns the code itself only when the server is configured to echo codes.
///
/// # Errors
///
/// Returns an error if the request fails or the server rejects the identifier.
pub async fn request_login_code(request: &CodeRequest) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body: wire::CodeRequestResponse = post_json("/api/auth/code/request", Some(&payload)).await?;
        if !body.ok {
            return Err(ApiError::Server("No se pudo solicitar el código".to_owned()));
        }
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Exchange a code for a session via `POST /api/auth/code/verify`.
/// Returns the landing route for the user's role.
///
/// # Errors
///
/// Returns an error if the request fails, the code is rejected or the
/// account is deactivated.
pub async fn verify_login_code(request: &CodeVerify) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body: wire::LoginResponse = post_json("/api/auth/code/verify", Some(&payload)).await?;
        if !body.ok {
            return Err(ApiError::Server("Código incorrecto".to_owned()));
        }
        Ok(body.redirect)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// READ STATE
// =============================================================================

/// Apply `action` to one observation (`POST /lectura/{action}/{id}`).
///
/// # Errors
///
/// Returns the transport or server failure; nothing was changed locally.
pub async fn set_read_state(observation_id: i64, action: ReadAction) -> Result<ReadStateChange, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp: ReadStateResponse = post_json(&action.endpoint(observation_id), None).await?;
        read_state_outcome(action, resp)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (observation_id, action);
        Err(ApiError::Unavailable)
    }
}

/// Mark every id read with one concurrent request each; results keep input order.
pub async fn mark_many_as_read(observation_ids: Vec<i64>) -> Vec<Result<ReadStateChange, ApiError>> {
    #[cfg(feature = "hydrate")]
    {
        let requests = observation_ids.into_iter().map(|id| set_read_state(id, ReadAction::Read));
        futures::future::join_all(requests).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        observation_ids.into_iter().map(|_| Err(ApiError::Unavailable)).collect()
    }
}

/// `GET /lectura/estadisticas_lectura`
///
/// # Errors
///
/// Returns the transport or server failure.
pub async fn fetch_statistics() -> Result<ReadStatistics, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        statistics_outcome(get_json(STATISTICS_ENDPOINT).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /lectura/observaciones`
///
/// # Errors
///
/// Returns the transport or server failure.
pub async fn fetch_reading_list() -> Result<Vec<ReadingRow>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        reading_list_outcome(get_json(READING_LIST_ENDPOINT).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// GUARDIAN DASHBOARD
// =============================================================================

/// Fetch the guardian's children, aborting after [`CHILDREN_TIMEOUT_MS`].
///
/// # Errors
///
/// [`ApiError::Timeout`] when the deadline passes first; otherwise the
/// transport or server failure.
pub async fn fetch_children() -> Result<Vec<Child>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use futures::future::{Either, select};

        let controller = web_sys::AbortController::new()
            .map_err(|_| ApiError::Network("AbortController unavailable".to_owned()))?;
        let request = gloo_net::http::Request::get(CHILDREN_ENDPOINT)
            .header("Accept", "application/json")
            .abort_signal(Some(&controller.signal()))
            .send();
        let deadline = gloo_timers::future::TimeoutFuture::new(CHILDREN_TIMEOUT_MS);

        let resp = match select(Box::pin(request), Box::pin(deadline)).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(((), _)) => {
                controller.abort();
                return Err(ApiError::Timeout);
            }
        };
        let body: wire::ChildrenResponse = read_response(resp).await?;
        Ok(body.hijos)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// `GET /acudiente/api/observaciones/{child_id}`
///
/// # Errors
///
/// Returns the transport or server failure.
pub async fn fetch_child_observations(child_id: i64) -> Result<ChildObservations, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&child_observations_endpoint(child_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = child_id;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/observaciones/{id}/multimedia`
///
/// # Errors
///
/// Returns the transport or server failure.
pub async fn fetch_multimedia(observation_id: i64) -> Result<Vec<MultimediaAsset>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        multimedia_outcome(get_json(&multimedia_endpoint(observation_id)).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = observation_id;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Send a validated registration to `POST /api/registro`.
///
/// # Errors
///
/// Returns the transport or server failure.
pub async fn submit_registration(request: &RegistrationRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let body: wire::RegistrationResponse = post_json(REGISTRATION_ENDPOINT, Some(&payload)).await?;
        if body.ok {
            Ok(())
        } else {
            Err(ApiError::Server(body.error.unwrap_or_else(|| "Error al enviar la solicitud".to_owned())))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
