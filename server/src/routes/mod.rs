//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON endpoints the portal pages call and stitches
//! them with Leptos SSR rendering under a single Axum router. Uploaded files
//! are served from `UPLOADS_DIR` under `/uploads`.
//!
//! ERROR HANDLING
//! ==============
//! Every JSON endpoint fails with a status code plus `{"error": "..."}` so
//! the browser can show the server's message verbatim.

pub mod acudiente;
pub mod auth;
pub mod lectura;
pub mod multimedia;
pub mod registro;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use wire::ErrorBody;

use crate::state::AppState;

/// Failure half of every JSON handler.
pub type ApiError = (StatusCode, Json<ErrorBody>);

/// Build an [`ApiError`].
pub fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(ErrorBody::new(message)))
}

/// JSON endpoints consumed by the portal pages.
fn api_routes(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_dir);

    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/code/request", post(auth::request_code))
        .route("/api/auth/code/verify", post(auth::verify_code))
        .route("/lectura/toggle_lectura/{id}", post(lectura::toggle))
        .route("/lectura/marcar_leido/{id}", post(lectura::mark_read))
        .route("/lectura/marcar_no_leido/{id}", post(lectura::mark_unread))
        .route("/lectura/estadisticas_lectura", get(lectura::statistics))
        .route("/lectura/observaciones", get(lectura::list))
        .route("/acudiente/api/hijos", get(acudiente::children))
        .route("/acudiente/api/hijos-temp", get(acudiente::children))
        .route("/acudiente/api/observaciones/{child_id}", get(acudiente::observations))
        .route("/api/observaciones/{id}/multimedia", get(multimedia::list))
        .route("/api/registro", post(registro::submit))
        .route("/healthz", get(healthz))
        .nest_service("/uploads", uploads)
        .with_state(state)
}

/// Full application: API routes + Leptos SSR pages + hydration assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS and CSS produced by the client build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
