//! Child selector dropdown state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guardian picks one child; the dashboard loads that child's
//! observations. Selection is reported through a typed [`ChildSelected`]
//! value rather than a document-level event.
//!
//! TRADE-OFFS
//! ==========
//! When the server cannot be reached, or reports no children, the selector
//! falls back to a fixed demo list so the page stays usable. That list is
//! flagged with `is_fallback` and the view labels it. A server-reported error
//! is not masked: it renders an error with Retry and an explicit "use demo
//! data" action.

#[cfg(test)]
#[path = "child_selector_test.rs"]
mod child_selector_test;

use crate::net::api::ApiError;
use crate::net::types::Child;

pub const PLACEHOLDER_LABEL: &str = "Seleccionar estudiante";
pub const LOADING_LABEL: &str = "Cargando estudiantes...";
pub const EMPTY_LABEL: &str = "Sin estudiantes registrados";

/// Demo children shown in degraded mode.
#[must_use]
pub fn fallback_children() -> Vec<Child> {
    vec![
        Child::new(1, "Angelo Curiel", "Preescolar"),
        Child::new(2, "María García", "Primero"),
        Child::new(3, "Juan Pérez", "Segundo"),
    ]
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectorPhase {
    #[default]
    Closed,
    Loading,
    Loaded,
    Errored(String),
}

/// Selection notification consumed by the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChildSelected {
    pub child_id: i64,
    pub child: Child,
}

#[derive(Clone, Debug, Default)]
pub struct ChildSelectorState {
    pub phase: SelectorPhase,
    pub children: Vec<Child>,
    pub is_fallback: bool,
    pub selected_id: Option<i64>,
}

impl ChildSelectorState {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != SelectorPhase::Closed
    }

    /// Open the dropdown. Returns `true` when the caller must fetch children.
    pub fn open(&mut self) -> bool {
        if self.children.is_empty() {
            self.phase = SelectorPhase::Loading;
            true
        } else {
            self.phase = SelectorPhase::Loaded;
            false
        }
    }

    pub fn close(&mut self) {
        self.phase = SelectorPhase::Closed;
    }

    /// Flip open/closed. Returns `true` when the caller must fetch children.
    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close();
            false
        } else {
            self.open()
        }
    }

    /// Re-issue the fetch after an error.
    pub fn retry(&mut self) {
        self.children.clear();
        self.is_fallback = false;
        self.phase = SelectorPhase::Loading;
    }

    /// Store the fetch outcome.
    ///
    /// A result arriving after the dropdown closed still fills the cache but
    /// does not reopen it.
    pub fn apply_fetch(&mut self, result: Result<Vec<Child>, ApiError>) {
        let next = match result {
            Ok(children) if !children.is_empty() => {
                self.children = children;
                self.is_fallback = false;
                SelectorPhase::Loaded
            }
            Ok(_) => {
                self.use_fallback_data();
                SelectorPhase::Loaded
            }
            Err(e) if e.is_connection_failure() => {
                self.use_fallback_data();
                SelectorPhase::Loaded
            }
            Err(e) => SelectorPhase::Errored(e.to_string()),
        };
        if self.is_open() {
            self.phase = next;
        }
    }

    /// Replace the list with the demo children.
    pub fn use_fallback_data(&mut self) {
        self.children = fallback_children();
        self.is_fallback = true;
        if self.is_open() {
            self.phase = SelectorPhase::Loaded;
        }
    }

    /// Select a child and close the dropdown.
    ///
    /// Returns the notification to emit, or `None` when the child is already
    /// selected or unknown.
    pub fn select(&mut self, child_id: i64) -> Option<ChildSelected> {
        self.close();
        if self.selected_id == Some(child_id) {
            return None;
        }
        let child = self.children.iter().find(|c| c.id == child_id)?.clone();
        self.selected_id = Some(child_id);
        Some(ChildSelected { child_id, child })
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Child> {
        let id = self.selected_id?;
        self.children.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn button_label(&self) -> String {
        self.selected().map_or_else(|| PLACEHOLDER_LABEL.to_owned(), |c| c.nombre.clone())
    }
}
