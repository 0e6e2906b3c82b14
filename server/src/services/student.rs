//! Guardian ↔ student lookups.

use sqlx::{PgPool, Row};
use uuid::Uuid;
use wire::Child;
use wire::child::{display_name, grade_label, teacher_label};

/// Children linked to a guardian, ordered by name.
pub async fn list_children(pool: &PgPool, guardian_id: Uuid) -> Result<Vec<Child>, sqlx::Error> {
    let rows = sqlx::query(
        r"SELECT s.id, s.first_name, s.last_name, s.grade,
                 t.first_name AS teacher_first, t.last_name AS teacher_last
          FROM students s
          LEFT JOIN users t ON t.id = s.teacher_id
          WHERE s.guardian_id = $1
          ORDER BY s.first_name, s.last_name, s.id",
    )
    .bind(guardian_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| {
            let first: String = r.get("first_name");
            let last: String = r.get("last_name");
            let grade: Option<String> = r.get("grade");
            let teacher_first: Option<String> = r.get("teacher_first");
            let teacher_last: Option<String> = r.get("teacher_last");
            Child {
                id: r.get("id"),
                nombre: display_name(&first, &last),
                grado: grade_label(grade.as_deref()),
                profesor: Some(teacher_label(teacher_first.as_deref(), teacher_last.as_deref())),
            }
        })
        .collect())
}

/// Whether `student_id` belongs to `guardian_id`.
pub async fn guardian_owns_student(pool: &PgPool, guardian_id: Uuid, student_id: i64) -> Result<bool, sqlx::Error> {
    let owned: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM students WHERE id = $1 AND guardian_id = $2)")
            .bind(student_id)
            .bind(guardian_id)
            .fetch_one(pool)
            .await?;
    Ok(owned)
}
