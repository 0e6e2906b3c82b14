//! One-time access codes for portal login.
//!
//! DESIGN
//! ======
//! The user names their account by email, cédula or PPT number. A code is
//! issued only for an active account that has an email on file, and it is
//! stored against the user id, so the same account can be reached through any
//! of its identifiers. Codes expire after ten minutes and are burnt after
//! [`MAX_FAILED_ATTEMPTS`] wrong guesses.
//!
//! Unknown identifiers, inactive accounts and accounts without an email all
//! look the same to the caller at request time. Deactivation is reported only
//! after a correct code, so the message never reveals an account to someone
//! who cannot read its mail.

use rand::Rng;
use sha2::{Digest, Sha256};
use sqlx::{PgPool, Row};
use uuid::Uuid;
use wire::{LoginIdentifier, LoginMethod};

use super::session::Role;
use crate::mail::{MailError, Mailer, OutgoingEmail, escape_html};

const CODE_LEN: usize = 6;
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const MAX_FAILED_ATTEMPTS: i32 = 5;
const ACCESS_CODE_TEMPLATE: &str = include_str!("../../templates/access_code.html");
const ACCESS_CODE_SUBJECT: &str = "Tu código de acceso a Teaching Notes";

#[derive(Debug, thiserror::Error)]
pub enum AccessCodeError {
    #[error(transparent)]
    Invalid(#[from] wire::LoginError),
    #[error("invalid code")]
    InvalidCode,
    #[error("expired or incorrect code")]
    VerificationFailed,
    #[error("account is deactivated")]
    AccountDisabled,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Mail(#[from] MailError),
}

/// The user row an identifier resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub first_name: String,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub is_active: bool,
}

impl Account {
    /// Landing route after login, by role. Unknown roles go to the home page.
    #[must_use]
    pub fn landing_route(&self) -> &'static str {
        match self.role {
            Some(Role::Acudiente) => "/acudiente",
            Some(Role::Profesor | Role::Admin) => "/lectura",
            None => "/",
        }
    }
}

/// A code ready to mail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    pub email: String,
    pub first_name: String,
    pub code: String,
}

#[must_use]
pub fn normalize_code(code: &str) -> Option<String> {
    let normalized = code.trim().to_ascii_uppercase();
    let well_formed = normalized.len() == CODE_LEN && normalized.bytes().all(|b| CODE_ALPHABET.contains(&b));
    well_formed.then_some(normalized)
}

#[must_use]
pub fn generate_access_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LEN)
        .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
        .collect()
}

#[must_use]
pub fn hash_access_code(code: &str) -> String {
    crate::services::session::bytes_to_hex(&Sha256::digest(code.as_bytes()))
}

/// Lookup statement for an identifier. The column comes from a closed enum.
#[must_use]
pub fn account_query(method: LoginMethod) -> &'static str {
    match method {
        LoginMethod::Correo => "SELECT id, first_name, email, role, is_active FROM users WHERE email = $1",
        LoginMethod::Cedula => "SELECT id, first_name, email, role, is_active FROM users WHERE cedula = $1",
        LoginMethod::Ppt => "SELECT id, first_name, email, role, is_active FROM users WHERE ppt = $1",
    }
}

pub async fn find_account(pool: &PgPool, identifier: &LoginIdentifier) -> Result<Option<Account>, sqlx::Error> {
    let row = sqlx::query(account_query(identifier.method))
        .bind(&identifier.value)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|r| {
        let role: String = r.get("role");
        Account {
            id: r.get("id"),
            first_name: r.get("first_name"),
            email: r.get("email"),
            role: Role::parse(&role),
            is_active: r.get("is_active"),
        }
    }))
}

/// Issue a fresh code for the account, replacing any outstanding one.
///
/// Returns `None` when there is no active account with an email to send to.
pub async fn issue_code(pool: &PgPool, identifier: &LoginIdentifier) -> Result<Option<IssuedCode>, AccessCodeError> {
    let Some(account) = find_account(pool, identifier).await? else {
        return Ok(None);
    };
    let Some(email) = account.email.filter(|_| account.is_active) else {
        tracing::debug!(user_id = %account.id, "no code issued: inactive account or no email on file");
        return Ok(None);
    };

    let code = generate_access_code();
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM login_codes WHERE user_id = $1 AND consumed_at IS NULL")
        .bind(account.id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO login_codes (user_id, code_hash) VALUES ($1, $2)")
        .bind(account.id)
        .bind(hash_access_code(&code))
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    Ok(Some(IssuedCode { email, first_name: account.first_name, code }))
}

/// Consume a code and return the account it unlocks.
///
/// A wrong guess counts against the newest outstanding code.
pub async fn redeem_code(pool: &PgPool, identifier: &LoginIdentifier, code: &str) -> Result<Account, AccessCodeError> {
    let code = normalize_code(code).ok_or(AccessCodeError::InvalidCode)?;
    let account = find_account(pool, identifier).await?.ok_or(AccessCodeError::VerificationFailed)?;

    let consumed = sqlx::query(
        r"UPDATE login_codes
          SET consumed_at = now()
          WHERE id = (
              SELECT id FROM login_codes
              WHERE user_id = $1 AND consumed_at IS NULL AND expires_at > now()
              ORDER BY created_at DESC
              LIMIT 1
          )
          AND code_hash = $2
          RETURNING id",
    )
    .bind(account.id)
    .bind(hash_access_code(&code))
    .fetch_optional(pool)
    .await?;

    if consumed.is_none() {
        sqlx::query(
            r"UPDATE login_codes
              SET attempts = attempts + 1,
                  consumed_at = CASE WHEN attempts + 1 >= $2 THEN now() ELSE consumed_at END
              WHERE id = (
                  SELECT id FROM login_codes
                  WHERE user_id = $1 AND consumed_at IS NULL AND expires_at > now()
                  ORDER BY created_at DESC
                  LIMIT 1
              )",
        )
        .bind(account.id)
        .bind(MAX_FAILED_ATTEMPTS)
        .execute(pool)
        .await?;
        return Err(AccessCodeError::VerificationFailed);
    }

    if !account.is_active {
        return Err(AccessCodeError::AccountDisabled);
    }
    Ok(account)
}

#[must_use]
pub fn render_access_code_email(issued: &IssuedCode) -> OutgoingEmail {
    let html = ACCESS_CODE_TEMPLATE
        .replace("{{NOMBRE}}", &escape_html(&issued.first_name))
        .replace("{{CODE}}", &escape_html(&issued.code));
    OutgoingEmail { to: issued.email.clone(), subject: ACCESS_CODE_SUBJECT.to_owned(), html }
}

pub async fn send_code(mailer: &dyn Mailer, issued: &IssuedCode) -> Result<(), AccessCodeError> {
    mailer.send(&render_access_code_email(issued)).await?;
    Ok(())
}

#[cfg(test)]
#[path = "access_code_test.rs"]
mod tests;
