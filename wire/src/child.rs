//! Children linked to a guardian.

use serde::{Deserialize, Serialize};

/// Grade label used when a student has none recorded.
pub const NO_GRADE: &str = "Sin grado";
/// Teacher label used when a student has no assigned teacher.
pub const NO_TEACHER: &str = "Sin profesor asignado";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Child {
    pub id: i64,
    pub nombre: String,
    pub grado: String,
    #[serde(default)]
    pub profesor: Option<String>,
}

impl Child {
    #[must_use]
    pub fn new(id: i64, nombre: &str, grado: &str) -> Self {
        Self { id, nombre: nombre.to_owned(), grado: grado.to_owned(), profesor: None }
    }
}

/// Payload of `GET /acudiente/api/hijos`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildrenResponse {
    #[serde(default)]
    pub hijos: Vec<Child>,
}

/// `"{first} {last}"`, tolerating a missing or blank half.
#[must_use]
pub fn display_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_owned()
}

/// Grade label with the `Sin grado` default.
#[must_use]
pub fn grade_label(grade: Option<&str>) -> String {
    grade
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map_or_else(|| NO_GRADE.to_owned(), str::to_owned)
}

/// `Prof. {first} {last}` when a teacher is assigned.
#[must_use]
pub fn teacher_label(first: Option<&str>, last: Option<&str>) -> String {
    match (first, last) {
        (None, None) => NO_TEACHER.to_owned(),
        (first, last) => format!("Prof. {}", display_name(first.unwrap_or_default(), last.unwrap_or_default())),
    }
}

#[cfg(test)]
#[path = "child_test.rs"]
mod tests;
