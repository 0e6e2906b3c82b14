//! Session management.
//!
//! ARCHITECTURE
//! ============
//! Browsers authenticate with an opaque random token stored in an HttpOnly
//! cookie. The token row carries its own expiry (30 minutes from login), so
//! validation is a single indexed lookup joined to the user and their role.
//!
//! TRADE-OFFS
//! ==========
//! Sessions are not extended on activity. A guardian reading observations for
//! longer than the lifetime logs in again; in exchange nothing writes on the
//! hot read path.

use std::fmt::Write;
use std::time::Duration;

use rand::Rng;
use serde::Serialize;
use sqlx::{PgPool, Row};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::env_parse;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Portal role of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Acudiente,
    Profesor,
    Admin,
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "acudiente" => Some(Self::Acudiente),
            "profesor" => Some(Self::Profesor),
            "admin" | "administrador" => Some(Self::Admin),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Acudiente => "acudiente",
            Self::Profesor => "profesor",
            Self::Admin => "admin",
        }
    }
}

/// User row returned from session validation.
#[derive(Debug, Clone, Serialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name (`first last`).
    pub name: String,
    pub email: Option<String>,
    pub role: Role,
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated user.
///
/// Users whose stored role is unknown, or whose account has been deactivated,
/// are treated as unauthenticated.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<SessionUser>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT
              u.id,
              trim(u.first_name || ' ' || u.last_name) AS name,
              u.email,
              u.role
          FROM sessions s
          JOIN users u ON u.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now() AND u.is_active",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.and_then(|r| {
        let role_raw: String = r.get("role");
        let role = Role::parse(&role_raw)?;
        Some(SessionUser { id: r.get("id"), name: r.get("name"), email: r.get("email"), role })
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

/// Remove expired sessions. Returns the number of rows deleted.
pub async fn purge_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= now()")
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Default seconds between expired-session sweeps.
const DEFAULT_SESSION_SWEEP_SECS: u64 = 300;

/// Spawn the background task that deletes expired sessions.
#[must_use]
pub fn spawn_session_sweeper(pool: PgPool) -> JoinHandle<()> {
    let sweep_secs = env_parse("SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS).max(1);
    tracing::info!(sweep_secs, "session sweeper configured");
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(sweep_secs)).await;
            match purge_expired_sessions(&pool).await {
                Ok(0) => {}
                Ok(purged) => tracing::debug!(purged, "expired sessions removed"),
                Err(e) => tracing::warn!(error = %e, "session sweep failed"),
            }
        }
    })
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
