#![recursion_limit = "256"]

mod config;
mod db;
mod mail;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let pool = db::init_pool(&database_url)
        .await
        .expect("database init failed");

    // Mail is optional: without it login codes are only echoed (if enabled)
    // and registrations are stored but not forwarded.
    let mailer: Option<Arc<dyn mail::Mailer>> = match mail::ResendMailer::from_env() {
        Ok(m) => {
            tracing::info!(from = m.sender(), "mailer initialized");
            Some(Arc::new(m))
        }
        Err(e) => {
            tracing::warn!(error = %e, "mailer not configured; email delivery disabled");
            None
        }
    };

    let config = config::PortalConfig::from_env();
    tracing::info!(
        uploads_dir = %config.uploads_dir.display(),
        registration_inbox = %config.registration_inbox,
        echo_login_codes = config.echo_login_codes,
        "portal configured"
    );

    let state = state::AppState::new(pool, mailer, config);

    let _sweeper = services::session::spawn_session_sweeper(state.pool.clone());

    let app = routes::app(state).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "teaching notes listening");
    axum::serve(listener, app).await.expect("server failed");
}
