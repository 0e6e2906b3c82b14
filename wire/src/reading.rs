//! Read/unread tracking payloads.
//!
//! DESIGN
//! ======
//! The read flag is a plain boolean. Three actions change it (toggle, mark
//! read, mark unread) and each maps to its own endpoint under `/lectura`.
//! Aggregate counts are always derived from `(total, read)` so the
//! `read + unread == total` invariant cannot be violated by construction.

use serde::{Deserialize, Serialize};

/// Requested change to an observation's read flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReadAction {
    Toggle,
    Read,
    Unread,
}

impl ReadAction {
    /// Path segment used by the server route.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Toggle => "toggle_lectura",
            Self::Read => "marcar_leido",
            Self::Unread => "marcar_no_leido",
        }
    }

    /// Full endpoint for an observation.
    #[must_use]
    pub fn endpoint(self, observation_id: i64) -> String {
        format!("/lectura/{}/{observation_id}", self.path_segment())
    }
}

/// Human label for a read flag, as used in server messages.
#[must_use]
pub fn state_label(read: bool) -> &'static str {
    if read { "leído" } else { "no leído" }
}

/// Response of the three `/lectura/{action}/{id}` endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observacion_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leido: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nuevo_estado: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReadStateResponse {
    /// Successful response after `observation_id` now has flag `read`.
    #[must_use]
    pub fn changed(observation_id: i64, read: bool) -> Self {
        let label = state_label(read);
        Self {
            success: true,
            message: Some(format!("Observación marcada como {label}")),
            observacion_id: Some(observation_id),
            leido: Some(read),
            nuevo_estado: Some(label.to_owned()),
            error: None,
        }
    }
}

/// Aggregate read counts for the current user's observations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadStatistics {
    pub total: u32,
    pub leidas: u32,
    pub no_leidas: u32,
    pub porcentaje_leidas: f64,
}

impl ReadStatistics {
    /// Derive every field from `total` and `read`. `read` is clamped to `total`.
    #[must_use]
    pub fn from_counts(total: u32, read: u32) -> Self {
        let leidas = read.min(total);
        Self {
            total,
            leidas,
            no_leidas: total - leidas,
            porcentaje_leidas: read_percentage(total, leidas),
        }
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        u64::from(self.leidas) + u64::from(self.no_leidas) == u64::from(self.total)
    }
}

/// `round(read / max(total, 1) * 100, 1)`.
#[must_use]
pub fn read_percentage(total: u32, read: u32) -> f64 {
    let pct = f64::from(read) / f64::from(total.max(1)) * 100.0;
    (pct * 10.0).round() / 10.0
}

/// Response of `GET /lectura/estadisticas_lectura`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estadisticas: Option<ReadStatistics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One row of the read-tracking table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRow {
    pub id: i64,
    pub fecha: String,
    pub tipo: String,
    pub descripcion: String,
    pub estudiante: String,
    #[serde(default)]
    pub profesor: Option<String>,
    pub leido: bool,
}

/// Response of `GET /lectura/observaciones`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub observaciones: Vec<ReadingRow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
#[path = "reading_test.rs"]
mod tests;
