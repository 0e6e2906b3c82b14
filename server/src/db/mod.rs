//! Database pool and schema migrations.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` calls [`init_pool`] once before binding the listener, so every
//! handler can assume the portal schema (users, students, observations,
//! multimedia, registration requests) is in place.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

fn max_connections_from(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
}

/// Connect to Postgres and run pending migrations.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn init_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let max_connections = max_connections_from(std::env::var("DB_MAX_CONNECTIONS").ok().as_deref());
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!(max_connections, "database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_connections_defaults_when_unset() {
        assert_eq!(max_connections_from(None), DEFAULT_DB_MAX_CONNECTIONS);
    }

    #[test]
    fn max_connections_parses_value() {
        assert_eq!(max_connections_from(Some(" 12 ")), 12);
    }

    #[test]
    fn max_connections_rejects_zero_and_garbage() {
        assert_eq!(max_connections_from(Some("0")), DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(max_connections_from(Some("many")), DEFAULT_DB_MAX_CONNECTIONS);
    }
}
