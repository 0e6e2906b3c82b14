//! School registration requests.
//!
//! DESIGN
//! ======
//! A submission is validated with the shared form rules, rate limited per
//! email address, stored as `pendiente`, and forwarded to the registration
//! inbox. The row is committed before the provider call so no pooled
//! connection is held across the HTTP round trip. If the provider rejects the
//! message the row is deleted again, so the user can retry without hitting the
//! duplicate-request guard.
//!
//! TRADE-OFFS
//! ==========
//! Without a configured mailer the row is committed and only logged. The
//! request is not lost, but nobody is notified until someone reads the table.

use sqlx::PgPool;
use wire::RegistrationRequest;

use crate::mail::{MailError, Mailer, OutgoingEmail, escape_html};
use crate::rate_limit::{RateLimitError, RateLimiter};

const REGISTRATION_TEMPLATE: &str = include_str!("../../templates/registration.html");

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Invalid(#[from] wire::RegistrationError),
    #[error(transparent)]
    RateLimited(#[from] RateLimitError),
    #[error("a pending request already exists for this email")]
    Duplicate,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Mail(#[from] MailError),
}

/// Notification sent to the registration inbox.
#[must_use]
pub fn render_registration_email(request: &RegistrationRequest, inbox: &str) -> OutgoingEmail {
    let html = REGISTRATION_TEMPLATE
        .replace("{{NOMBRE}}", &escape_html(&request.nombre))
        .replace("{{CORREO}}", &escape_html(&request.correo))
        .replace("{{CELULAR}}", &escape_html(&request.celular))
        .replace("{{COLEGIO}}", &escape_html(&request.nombre_colegio))
        .replace("{{ESTUDIANTES}}", &request.cantidad_estudiantes.to_string());
    OutgoingEmail {
        to: inbox.to_owned(),
        subject: format!("Nueva solicitud de registro: {}", request.nombre_colegio),
        html,
    }
}

/// Store and forward a registration. Returns the new request id.
pub async fn submit(
    pool: &PgPool,
    mailer: Option<&dyn Mailer>,
    limiter: &RateLimiter,
    inbox: &str,
    request: &RegistrationRequest,
) -> Result<i64, RegistrationError> {
    let request = request.revalidate()?;
    limiter.check_and_record(&request.correo)?;

    let inserted: Option<i64> = sqlx::query_scalar(
        r"INSERT INTO registration_requests
              (nombre, correo, celular, nombre_colegio, cantidad_estudiantes, estado)
          VALUES ($1, $2, $3, $4, $5, 'pendiente')
          ON CONFLICT (correo) WHERE estado = 'pendiente' DO NOTHING
          RETURNING id",
    )
    .bind(&request.nombre)
    .bind(&request.correo)
    .bind(&request.celular)
    .bind(&request.nombre_colegio)
    .bind(i32::try_from(request.cantidad_estudiantes).unwrap_or(i32::MAX))
    .fetch_optional(pool)
    .await?;

    let Some(id) = inserted else {
        return Err(RegistrationError::Duplicate);
    };

    let Some(mailer) = mailer else {
        tracing::warn!(request_id = id, "mail not configured; registration stored without notification");
        return Ok(id);
    };

    if let Err(err) = mailer.send(&render_registration_email(&request, inbox)).await {
        release(pool, id).await;
        return Err(err.into());
    }

    tracing::info!(request_id = id, colegio = %request.nombre_colegio, "registration request stored");
    Ok(id)
}

/// Drop a request whose notification failed.
async fn release(pool: &PgPool, id: i64) {
    let result = sqlx::query("DELETE FROM registration_requests WHERE id = $1 AND estado = 'pendiente'")
        .bind(id)
        .execute(pool)
        .await;
    match result {
        Ok(_) => tracing::warn!(request_id = id, "registration notification failed; request released"),
        Err(e) => tracing::error!(request_id = id, error = %e, "failed to release registration request"),
    }
}

#[cfg(test)]
#[path = "registration_test.rs"]
mod tests;
