//! Observations as shown on the guardian dashboard.

use serde::{Deserialize, Serialize};

/// Number of description characters shown on a collapsed card.
pub const PREVIEW_CHARS: usize = 100;

/// Observation category. Unknown categories are preserved verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ObservationKind {
    Positiva,
    Mejora,
    Neutral,
    Other(String),
}

impl ObservationKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Positiva => "Positiva",
            Self::Mejora => "Mejora",
            Self::Neutral => "Neutral",
            Self::Other(raw) => raw,
        }
    }

    /// Font Awesome icon class for the card header.
    #[must_use]
    pub fn icon_class(&self) -> &'static str {
        match self {
            Self::Positiva => "fa-smile",
            Self::Mejora => "fa-exclamation-triangle",
            Self::Neutral => "fa-info-circle",
            Self::Other(_) => "fa-clipboard",
        }
    }

    /// CSS modifier used to color the card.
    #[must_use]
    pub fn css_modifier(&self) -> &'static str {
        match self {
            Self::Positiva => "positiva",
            Self::Mejora => "mejora",
            Self::Neutral => "neutral",
            Self::Other(_) => "otra",
        }
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Positiva)
    }
}

impl From<String> for ObservationKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Positiva" => Self::Positiva,
            "Mejora" => Self::Mejora,
            "Neutral" => Self::Neutral,
            _ => Self::Other(raw),
        }
    }
}

impl From<ObservationKind> for String {
    fn from(kind: ObservationKind) -> Self {
        match kind {
            ObservationKind::Other(raw) => raw,
            other => other.as_str().to_owned(),
        }
    }
}

/// One observation in a child's dashboard list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub id: i64,
    /// Server-formatted timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub fecha: String,
    pub tipo: ObservationKind,
    pub descripcion: String,
    #[serde(default)]
    pub fotos: bool,
    #[serde(default)]
    pub videos: bool,
    #[serde(default)]
    pub profesor: Option<String>,
    #[serde(default)]
    pub leido: bool,
}

impl Observation {
    #[must_use]
    pub fn has_multimedia(&self) -> bool {
        self.fotos || self.videos
    }

    /// Collapsed-card text: the first [`PREVIEW_CHARS`] characters plus `...`.
    #[must_use]
    pub fn preview(&self) -> String {
        preview_text(&self.descripcion, PREVIEW_CHARS)
    }
}

/// Truncate `text` to `limit` characters, appending `...` when cut.
#[must_use]
pub fn preview_text(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_owned(),
    }
}

/// Payload of `GET /acudiente/api/observaciones/{child_id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildObservations {
    #[serde(default)]
    pub observaciones: Vec<Observation>,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub positivas: u32,
    #[serde(default)]
    pub multimedia: u32,
}

impl ChildObservations {
    /// Build the payload and derive its summary counts from the list.
    #[must_use]
    pub fn from_observations(observaciones: Vec<Observation>) -> Self {
        let total = u32::try_from(observaciones.len()).unwrap_or(u32::MAX);
        let positivas = count_u32(observaciones.iter().filter(|o| o.tipo.is_positive()));
        let multimedia = count_u32(observaciones.iter().filter(|o| o.has_multimedia()));
        Self { observaciones, total, positivas, multimedia }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observaciones.is_empty()
    }
}

fn count_u32<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
#[path = "observation_test.rs"]
mod tests;
