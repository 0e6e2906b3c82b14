//! Multimedia attachments of an observation.

use sqlx::{PgPool, Row};
use wire::MultimediaAsset;

use super::reading::{OWNER_QUERY, ObservationScope};

#[derive(Debug, thiserror::Error)]
pub enum MultimediaError {
    #[error("observation not found: {0}")]
    NotFound(i64),
    #[error("observation not visible to user: {0}")]
    Forbidden(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

fn size_from_db(raw: i64) -> u64 {
    u64::try_from(raw).unwrap_or(0)
}

/// Assets of an observation the scope may see, oldest upload first.
pub async fn list_for_observation(
    pool: &PgPool,
    scope: ObservationScope,
    observation_id: i64,
) -> Result<Vec<MultimediaAsset>, MultimediaError> {
    let owner = sqlx::query(OWNER_QUERY)
        .bind(observation_id)
        .fetch_optional(pool)
        .await?
        .ok_or(MultimediaError::NotFound(observation_id))?;
    if !scope.allows(owner.get("student_guardian"), owner.get("teacher_id")) {
        return Err(MultimediaError::Forbidden(observation_id));
    }

    let rows = sqlx::query(
        r"SELECT id, filename, file_type, file_path, file_size
          FROM multimedia
          WHERE observation_id = $1
          ORDER BY created_at, id",
    )
    .bind(observation_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            let filename: String = r.get("filename");
            let file_type: Option<String> = r.get("file_type");
            let file_path: String = r.get("file_path");
            MultimediaAsset::from_stored(
                r.get("id"),
                &filename,
                file_type.as_deref(),
                &file_path,
                size_from_db(r.get("file_size")),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_sizes_become_zero() {
        assert_eq!(size_from_db(-5), 0);
        assert_eq!(size_from_db(2048), 2048);
    }

    #[test]
    fn errors_name_the_observation() {
        assert_eq!(MultimediaError::NotFound(3).to_string(), "observation not found: 3");
        assert_eq!(MultimediaError::Forbidden(4).to_string(), "observation not visible to user: 4");
    }
}
