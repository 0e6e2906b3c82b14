//! Auth routes: one-time access codes, session cookie, role extractors.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;
use wire::{CodeRequest, CodeRequestResponse, CodeVerify, LoginIdentifier, LoginResponse};

use super::{ApiError, api_error};
use crate::config::env_bool;
use crate::services::access_code::{self, AccessCodeError};
use crate::services::session::{self, Role};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";
const SESSION_MINUTES: i64 = 30;

pub(crate) const NOT_AUTHENTICATED: &str = "Usuario no autenticado";
pub(crate) const NOT_AUTHORIZED: &str = "No autorizado";

pub(crate) fn cookie_secure() -> bool {
    if let Some(value) = env_bool("COOKIE_SECURE") {
        return value;
    }

    std::env::var("PUBLIC_BASE_URL")
        .map(|uri| uri.starts_with("https://"))
        .unwrap_or(false)
}

fn session_cookie(value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(cookie_secure())
        .max_age(max_age)
        .build()
}

// =============================================================================
// AUTH EXTRACTORS
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(api_error(StatusCode::UNAUTHORIZED, NOT_AUTHENTICATED));
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session lookup failed");
                api_error(StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor")
            })?
            .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, NOT_AUTHENTICATED))?;

        Ok(Self { user, token: token.to_owned() })
    }
}

/// Authenticated user with the guardian role.
pub struct GuardianUser(pub session::SessionUser);

impl<S> axum::extract::FromRequestParts<S> for GuardianUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = AuthUser::from_request_parts(parts, state)
            .await
            .map_err(|(status, _)| api_error(status, NOT_AUTHORIZED))?;
        require_guardian(auth.user).map(Self)
    }
}

pub(crate) fn require_guardian(user: session::SessionUser) -> Result<session::SessionUser, ApiError> {
    if user.role == Role::Acudiente {
        Ok(user)
    } else {
        Err(api_error(StatusCode::FORBIDDEN, NOT_AUTHORIZED))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, "session delete failed");
    }

    let jar = CookieJar::new().add(session_cookie(String::new(), Duration::ZERO));
    (jar, StatusCode::NO_CONTENT)
}

const DISABLED_ACCOUNT: &str = "Tu cuenta ha sido desactivada. Por favor, contacta al administrador.";

pub(crate) fn access_code_error_to_response(err: AccessCodeError) -> ApiError {
    match err {
        AccessCodeError::Invalid(e) => api_error(StatusCode::BAD_REQUEST, e.to_string()),
        AccessCodeError::InvalidCode => api_error(StatusCode::BAD_REQUEST, "Código inválido"),
        AccessCodeError::VerificationFailed => api_error(StatusCode::UNAUTHORIZED, "Código incorrecto o vencido"),
        AccessCodeError::AccountDisabled => api_error(StatusCode::FORBIDDEN, DISABLED_ACCOUNT),
        AccessCodeError::Mail(e) => {
            tracing::error!(error = %e, "access code delivery failed");
            api_error(StatusCode::BAD_GATEWAY, "No se pudo enviar el código")
        }
        AccessCodeError::Database(e) => {
            tracing::error!(error = %e, "access code database error");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor")
        }
    }
}

/// `POST /api/auth/code/request`: issue and mail a login code.
///
/// Every well-formed identifier gets `{ok: true}`, whether or not it names an
/// account that can receive a code.
pub async fn request_code(
    State(state): State<AppState>,
    Json(body): Json<CodeRequest>,
) -> Result<Json<CodeRequestResponse>, ApiError> {
    let identifier = LoginIdentifier::parse(body.login_method, &body.usuario)
        .map_err(|e| access_code_error_to_response(e.into()))?;
    state
        .login_code_limiter
        .check_and_record(&identifier.limiter_key())
        .map_err(|e| api_error(StatusCode::TOO_MANY_REQUESTS, e.to_string()))?;

    let Some(issued) = access_code::issue_code(&state.pool, &identifier)
        .await
        .map_err(access_code_error_to_response)?
    else {
        tracing::info!(method = identifier.method.as_str(), "login code requested for unavailable account");
        return Ok(Json(CodeRequestResponse { ok: true, code: None }));
    };

    match state.mailer() {
        Some(mailer) => access_code::send_code(mailer, &issued)
            .await
            .map_err(access_code_error_to_response)?,
        None if state.config.echo_login_codes => {}
        None => tracing::warn!("mail not configured and code echo disabled; login code was not delivered"),
    }

    let echoed = state.config.echo_login_codes.then_some(issued.code);
    Ok(Json(CodeRequestResponse { ok: true, code: echoed }))
}

/// `POST /api/auth/code/verify`: exchange a code for a session cookie and the
/// role's landing route.
pub async fn verify_code(State(state): State<AppState>, Json(body): Json<CodeVerify>) -> Response {
    let account = match LoginIdentifier::parse(body.login_method, &body.usuario) {
        Ok(identifier) => access_code::redeem_code(&state.pool, &identifier, &body.code).await,
        Err(e) => Err(e.into()),
    };
    let account = match account {
        Ok(account) => account,
        Err(e) => return access_code_error_to_response(e).into_response(),
    };

    let token = match session::create_session(&state.pool, account.id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return api_error(StatusCode::INTERNAL_SERVER_ERROR, "Error interno del servidor").into_response();
        }
    };

    tracing::info!(user_id = %account.id, method = body.login_method.as_str(), "login verified");
    let jar = CookieJar::new().add(session_cookie(token, Duration::minutes(SESSION_MINUTES)));
    let body = LoginResponse {
        ok: true,
        redirect: account.landing_route().to_owned(),
        nombre: account.first_name,
    };
    (jar, Json(body)).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
