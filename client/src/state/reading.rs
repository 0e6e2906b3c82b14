//! Read-state controller state for the observation read-tracking table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rows change their read flag only after the server confirms the change.
//! While a request for a row is in flight its control is disabled and further
//! triggers for that row are ignored; other rows stay independent.
//!
//! DESIGN
//! ======
//! The badge, button and row classification are all derived from the row's
//! `leido` flag through [`ReadVisual`], so the three affordances can never
//! disagree with each other.

#[cfg(test)]
#[path = "reading_test.rs"]
mod reading_test;

use std::collections::HashSet;

use crate::net::types::{ReadAction, ReadingRow};

/// Button label while a request is in flight.
pub const PROCESSING_LABEL: &str = "Procesando...";

/// Everything that renders differently for read vs unread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadVisual {
    pub badge_text: &'static str,
    pub badge_class: &'static str,
    pub badge_icon: &'static str,
    /// Label of the button offering the inverse action.
    pub button_label: &'static str,
    pub button_class: &'static str,
    pub button_icon: &'static str,
    pub row_class: &'static str,
}

#[must_use]
pub fn visual_for(read: bool) -> ReadVisual {
    if read {
        ReadVisual {
            badge_text: "Leído",
            badge_class: "estado-lectura badge badge-success",
            badge_icon: "fas fa-eye text-success",
            button_label: "Marcar no leído",
            button_class: "btn btn-sm btn-warning btn-toggle-lectura",
            button_icon: "fas fa-eye-slash",
            row_class: "observacion-leida",
        }
    } else {
        ReadVisual {
            badge_text: "No leído",
            badge_class: "estado-lectura badge badge-warning",
            badge_icon: "fas fa-eye-slash text-warning",
            button_label: "Marcar leído",
            button_class: "btn btn-sm btn-success btn-toggle-lectura",
            button_icon: "fas fa-eye",
            row_class: "observacion-no-leida",
        }
    }
}

/// Table filter over the current visual state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReadFilter {
    #[default]
    Todas,
    Leidas,
    NoLeidas,
}

impl ReadFilter {
    pub const ALL: [Self; 3] = [Self::Todas, Self::Leidas, Self::NoLeidas];

    /// Unknown values show everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "leidas" => Self::Leidas,
            "no-leidas" => Self::NoLeidas,
            _ => Self::Todas,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todas => "todas",
            Self::Leidas => "leidas",
            Self::NoLeidas => "no-leidas",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Todas => "Todas",
            Self::Leidas => "Leídas",
            Self::NoLeidas => "No leídas",
        }
    }

    #[must_use]
    pub fn matches(self, read: bool) -> bool {
        match self {
            Self::Todas => true,
            Self::Leidas => read,
            Self::NoLeidas => !read,
        }
    }
}

/// Rows of the read table plus per-row request bookkeeping.
#[derive(Clone, Debug, Default)]
pub struct ReadingState {
    pub rows: Vec<ReadingRow>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: ReadFilter,
    pending: HashSet<i64>,
    /// Bulk mark-as-read in flight.
    pub bulk_pending: bool,
}

impl ReadingState {
    pub fn set_rows(&mut self, rows: Vec<ReadingRow>) {
        self.rows = rows;
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Claim the row's control for a request. `false` if one is already in flight.
    pub fn begin(&mut self, observation_id: i64) -> bool {
        self.pending.insert(observation_id)
    }

    /// Release the row's control; on a confirmed change store the new flag.
    ///
    /// Returns `true` when the row's displayed state changed.
    pub fn finish(&mut self, observation_id: i64, confirmed: Option<bool>) -> bool {
        self.pending.remove(&observation_id);
        let Some(read) = confirmed else {
            return false;
        };
        match self.rows.iter_mut().find(|r| r.id == observation_id) {
            Some(row) if row.leido != read => {
                row.leido = read;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self, observation_id: i64) -> bool {
        self.pending.contains(&observation_id)
    }

    #[must_use]
    pub fn read_flag(&self, observation_id: i64) -> Option<bool> {
        self.rows.iter().find(|r| r.id == observation_id).map(|r| r.leido)
    }

    /// Action the row's button performs: always the inverse of its state.
    #[must_use]
    pub fn button_action(&self, observation_id: i64) -> ReadAction {
        match self.read_flag(observation_id) {
            Some(true) => ReadAction::Unread,
            _ => ReadAction::Read,
        }
    }

    #[must_use]
    pub fn visible_rows(&self) -> Vec<ReadingRow> {
        self.rows.iter().filter(|r| self.filter.matches(r.leido)).cloned().collect()
    }

    /// Ids still unread, in table order.
    #[must_use]
    pub fn unread_ids(&self) -> Vec<i64> {
        self.rows.iter().filter(|r| !r.leido).map(|r| r.id).collect()
    }
}
