//! Observation listing for the guardian dashboard.
//!
//! ERROR HANDLING
//! ==============
//! A child that does not exist and a child that belongs to another guardian
//! produce the same error, so the endpoint does not reveal which student ids
//! exist.

use std::collections::HashMap;

use sqlx::{PgPool, Row};
use uuid::Uuid;
use wire::media::{MediaKind, classify};
use wire::{ChildObservations, Observation, ObservationKind};

use super::student;

#[derive(Debug, thiserror::Error)]
pub enum ObservationError {
    #[error("student not found or not owned by guardian: {0}")]
    NotOwned(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Attachment row used to derive the photo/video flags.
#[derive(Debug, Clone)]
pub struct AttachmentRef {
    pub observation_id: i64,
    pub file_type: Option<String>,
    pub filename: String,
}

/// `(has photos, has videos)` per observation id.
#[must_use]
pub fn media_flags(attachments: &[AttachmentRef]) -> HashMap<i64, (bool, bool)> {
    let mut flags: HashMap<i64, (bool, bool)> = HashMap::new();
    for att in attachments {
        let entry = flags.entry(att.observation_id).or_default();
        match classify(att.file_type.as_deref(), &att.filename) {
            Some(MediaKind::Image) => entry.0 = true,
            Some(MediaKind::Video) => entry.1 = true,
            None => {}
        }
    }
    flags
}

/// Observations for one of the guardian's children, newest first, with counts.
pub async fn for_child(pool: &PgPool, guardian_id: Uuid, child_id: i64) -> Result<ChildObservations, ObservationError> {
    if !student::guardian_owns_student(pool, guardian_id, child_id).await? {
        return Err(ObservationError::NotOwned(child_id));
    }

    let rows = sqlx::query(
        r"SELECT
              o.id,
              to_char(o.created_at, 'YYYY-MM-DD HH24:MI:SS') AS fecha,
              o.kind,
              o.description,
              o.is_read,
              t.first_name AS teacher_first,
              t.last_name  AS teacher_last
          FROM observations o
          LEFT JOIN users t ON t.id = o.teacher_id
          WHERE o.student_id = $1
          ORDER BY o.created_at DESC, o.id DESC",
    )
    .bind(child_id)
    .fetch_all(pool)
    .await?;

    let ids: Vec<i64> = rows.iter().map(|r| r.get("id")).collect();
    let attachments = if ids.is_empty() {
        Vec::new()
    } else {
        sqlx::query("SELECT observation_id, file_type, filename FROM multimedia WHERE observation_id = ANY($1)")
            .bind(&ids)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(|r| AttachmentRef {
                observation_id: r.get("observation_id"),
                file_type: r.get("file_type"),
                filename: r.get("filename"),
            })
            .collect()
    };
    let flags = media_flags(&attachments);

    let observaciones = rows
        .into_iter()
        .map(|r| {
            let id: i64 = r.get("id");
            let (fotos, videos) = flags.get(&id).copied().unwrap_or_default();
            let teacher_first: Option<String> = r.get("teacher_first");
            let teacher_last: Option<String> = r.get("teacher_last");
            let kind: String = r.get("kind");
            Observation {
                id,
                fecha: r.get("fecha"),
                tipo: ObservationKind::from(kind),
                descripcion: r.get("description"),
                fotos,
                videos,
                profesor: teacher_first.map(|first| {
                    wire::child::teacher_label(Some(&first), teacher_last.as_deref())
                }),
                leido: r.get("is_read"),
            }
        })
        .collect();

    Ok(ChildObservations::from_observations(observaciones))
}

#[cfg(test)]
#[path = "observation_test.rs"]
mod tests;
