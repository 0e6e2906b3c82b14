//! Observation read-state service.
//!
//! DESIGN
//! ======
//! Every read endpoint works inside an [`ObservationScope`] derived from the
//! session role: guardians see observations about the students they are
//! guardian of (`students.guardian_id`, the same ownership the dashboard
//! uses), teachers see the ones they wrote, admins see everything. The same scope filters the
//! statistics and gates writes, so a user can never change a flag on an
//! observation that would not appear in their own counts.
//!
//! Flag changes are one `UPDATE ... RETURNING`, so concurrent toggles on the
//! same observation serialize in Postgres and each caller gets back the value
//! its own statement produced.

use sqlx::{PgPool, Row};
use uuid::Uuid;
use wire::{ReadAction, ReadStatistics, ReadingRow};

use super::session::{Role, SessionUser};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ReadingError {
    #[error("observation not found: {0}")]
    NotFound(i64),
    #[error("observation not visible to user: {0}")]
    Forbidden(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Which observations a user may see and mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationScope {
    Guardian(Uuid),
    Teacher(Uuid),
    All,
}

impl ObservationScope {
    #[must_use]
    pub fn for_user(user: &SessionUser) -> Self {
        match user.role {
            Role::Acudiente => Self::Guardian(user.id),
            Role::Profesor => Self::Teacher(user.id),
            Role::Admin => Self::All,
        }
    }

    /// `student_guardian` is the guardian of the observation's student, not
    /// the nullable `observations.guardian_id` column.
    #[must_use]
    pub fn allows(self, student_guardian: Option<Uuid>, teacher_id: Option<Uuid>) -> bool {
        match self {
            Self::Guardian(id) => student_guardian == Some(id),
            Self::Teacher(id) => teacher_id == Some(id),
            Self::All => true,
        }
    }

    /// `(guardian filter, teacher filter)` bind values; `None` means unfiltered.
    #[must_use]
    pub fn filters(self) -> (Option<Uuid>, Option<Uuid>) {
        match self {
            Self::Guardian(id) => (Some(id), None),
            Self::Teacher(id) => (None, Some(id)),
            Self::All => (None, None),
        }
    }
}

/// Flag to store for an action; `None` means flip the stored value.
#[must_use]
pub fn target_flag(action: ReadAction) -> Option<bool> {
    match action {
        ReadAction::Toggle => None,
        ReadAction::Read => Some(true),
        ReadAction::Unread => Some(false),
    }
}

/// Owner columns checked by [`ObservationScope::allows`].
pub(crate) const OWNER_QUERY: &str = r"SELECT s.guardian_id AS student_guardian, o.teacher_id
    FROM observations o
    JOIN students s ON s.id = o.student_id
    WHERE o.id = $1";

fn count_to_u32(raw: i64) -> u32 {
    u32::try_from(raw.max(0)).unwrap_or(u32::MAX)
}

// =============================================================================
// WRITES
// =============================================================================

/// Apply `action` to an observation and return the stored flag.
///
/// Marking read stamps `read_at`/`read_by`; marking unread clears both.
pub async fn set_read_state(
    pool: &PgPool,
    user: &SessionUser,
    observation_id: i64,
    action: ReadAction,
) -> Result<bool, ReadingError> {
    let row = sqlx::query(OWNER_QUERY)
        .bind(observation_id)
        .fetch_optional(pool)
        .await?
        .ok_or(ReadingError::NotFound(observation_id))?;

    let scope = ObservationScope::for_user(user);
    if !scope.allows(row.get("student_guardian"), row.get("teacher_id")) {
        return Err(ReadingError::Forbidden(observation_id));
    }

    let updated = sqlx::query(
        r"UPDATE observations
          SET is_read = COALESCE($2, NOT is_read),
              read_at = CASE WHEN COALESCE($2, NOT is_read) THEN now() ELSE NULL END,
              read_by = CASE WHEN COALESCE($2, NOT is_read) THEN $3 ELSE NULL END
          WHERE id = $1
          RETURNING is_read",
    )
    .bind(observation_id)
    .bind(target_flag(action))
    .bind(user.id)
    .fetch_optional(pool)
    .await?
    .ok_or(ReadingError::NotFound(observation_id))?;

    let is_read: bool = updated.get("is_read");
    tracing::debug!(observation_id, is_read, user_id = %user.id, ?action, "read state changed");
    Ok(is_read)
}

// =============================================================================
// READS
// =============================================================================

/// Total/read counts over the scope.
pub async fn statistics(pool: &PgPool, scope: ObservationScope) -> Result<ReadStatistics, sqlx::Error> {
    let (guardian, teacher) = scope.filters();
    let row = sqlx::query(
        r"SELECT
              COUNT(*)                          AS total,
              COUNT(*) FILTER (WHERE o.is_read) AS read
          FROM observations o
          WHERE ($1::uuid IS NULL OR EXISTS (
                    SELECT 1 FROM students s WHERE s.id = o.student_id AND s.guardian_id = $1))
            AND ($2::uuid IS NULL OR o.teacher_id = $2)",
    )
    .bind(guardian)
    .bind(teacher)
    .fetch_one(pool)
    .await?;

    let total = count_to_u32(row.get("total"));
    let read = count_to_u32(row.get("read"));
    Ok(ReadStatistics::from_counts(total, read))
}

/// Observations in scope for the read-tracking table, newest first.
pub async fn list_for_scope(pool: &PgPool, scope: ObservationScope) -> Result<Vec<ReadingRow>, sqlx::Error> {
    let (guardian, teacher) = scope.filters();
    let rows = sqlx::query(
        r"SELECT
              o.id,
              to_char(o.created_at, 'YYYY-MM-DD HH24:MI:SS') AS fecha,
              o.kind,
              o.description,
              trim(s.first_name || ' ' || s.last_name) AS estudiante,
              CASE WHEN t.id IS NULL THEN NULL
                   ELSE trim(t.first_name || ' ' || t.last_name) END AS profesor,
              o.is_read
          FROM observations o
          JOIN students s ON s.id = o.student_id
          LEFT JOIN users t ON t.id = o.teacher_id
          WHERE ($1::uuid IS NULL OR s.guardian_id = $1)
            AND ($2::uuid IS NULL OR o.teacher_id = $2)
          ORDER BY o.created_at DESC, o.id DESC",
    )
    .bind(guardian)
    .bind(teacher)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| ReadingRow {
            id: r.get("id"),
            fecha: r.get("fecha"),
            tipo: r.get("kind"),
            descripcion: r.get("description"),
            estudiante: r.get("estudiante"),
            profesor: r.get("profesor"),
            leido: r.get("is_read"),
        })
        .collect())
}

#[cfg(test)]
#[path = "reading_test.rs"]
mod tests;
