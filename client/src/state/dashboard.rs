//! Dashboard loader state: one child's observations plus card expansion.
//!
//! SYSTEM CONTEXT
//! ==============
//! `Idle → Loading → {Loaded | Errored}` per child selection. A response is
//! applied only while the dashboard is still loading that same child, so a
//! slow answer for a previously selected child never overwrites the current
//! one.
//!
//! Read-state requests in flight are tracked here by observation id rather
//! than in each card, so re-rendering a card never re-enables its button.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashSet;

use crate::net::api::ApiError;
use crate::net::types::{ChildObservations, MediaKind, Observation};

pub const LOADING_MESSAGE: &str = "Cargando observaciones...";
pub const CONNECTION_ERROR: &str = "Error de conexión al cargar observaciones";
pub const EMPTY_MESSAGE: &str = "No hay observaciones registradas";
pub const NO_MEDIA_LABEL: &str = "Sin multimedia";

/// One "Ver ..." button in a card footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaButton {
    pub kind: MediaKind,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Footer buttons for an observation; empty means render [`NO_MEDIA_LABEL`].
#[must_use]
pub fn media_buttons(observation: &Observation) -> Vec<MediaButton> {
    let mut buttons = Vec::with_capacity(2);
    if observation.fotos {
        buttons.push(MediaButton { kind: MediaKind::Image, label: "Ver Fotos", icon: "fas fa-images" });
    }
    if observation.videos {
        buttons.push(MediaButton { kind: MediaKind::Video, label: "Ver Videos", icon: "fas fa-video" });
    }
    buttons
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading { child_id: i64 },
    Loaded { child_id: i64, data: ChildObservations },
    Errored { child_id: i64, message: String },
}

/// What the content area shows. Changes only on load transitions, so the
/// card list is not rebuilt when a card expands or a flag flips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pane {
    Idle,
    Loading,
    Errored(String),
    Empty,
    Cards,
}

/// Inline banner text for a failed load.
#[must_use]
pub fn load_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Server(message) => format!("Error al cargar observaciones: {message}"),
        _ => CONNECTION_ERROR.to_owned(),
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub load: LoadState,
    expanded: HashSet<i64>,
    pending: HashSet<i64>,
}

impl DashboardState {
    /// Enter Loading for `child_id`, dropping the previous child's cards.
    /// Requests still in flight stay pending until they settle.
    pub fn begin_load(&mut self, child_id: i64) {
        self.load = LoadState::Loading { child_id };
        self.expanded.clear();
    }

    /// Apply a fetch result. Returns `false` if it was stale and dropped.
    pub fn finish_load(&mut self, child_id: i64, result: Result<ChildObservations, ApiError>) -> bool {
        if self.load != (LoadState::Loading { child_id }) {
            return false;
        }
        self.load = match result {
            Ok(data) => LoadState::Loaded { child_id, data },
            Err(e) => LoadState::Errored { child_id, message: load_error_message(&e) },
        };
        true
    }

    /// Child of the current (or last) load, used by refresh.
    #[must_use]
    pub fn current_child_id(&self) -> Option<i64> {
        match &self.load {
            LoadState::Idle => None,
            LoadState::Loading { child_id } | LoadState::Loaded { child_id, .. } | LoadState::Errored { child_id, .. } => {
                Some(*child_id)
            }
        }
    }

    #[must_use]
    pub fn data(&self) -> Option<&ChildObservations> {
        match &self.load {
            LoadState::Loaded { data, .. } => Some(data),
            _ => None,
        }
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        match self.data() {
            Some(d) => &d.observaciones,
            None => &[],
        }
    }

    /// `(total, positivas, multimedia)`; zeroes until loaded.
    #[must_use]
    pub fn summary(&self) -> (u32, u32, u32) {
        self.data().map_or((0, 0, 0), |d| (d.total, d.positivas, d.multimedia))
    }

    #[must_use]
    pub fn pane(&self) -> Pane {
        match &self.load {
            LoadState::Idle => Pane::Idle,
            LoadState::Loading { .. } => Pane::Loading,
            LoadState::Errored { message, .. } => Pane::Errored(message.clone()),
            // Loaded with no observations: the explicit empty state, not an error.
            LoadState::Loaded { data, .. } if data.is_empty() => Pane::Empty,
            LoadState::Loaded { .. } => Pane::Cards,
        }
    }

    pub fn toggle_card(&mut self, observation_id: i64) {
        if !self.expanded.remove(&observation_id) {
            self.expanded.insert(observation_id);
        }
    }

    #[must_use]
    pub fn is_expanded(&self, observation_id: i64) -> bool {
        self.expanded.contains(&observation_id)
    }

    /// Reflect a confirmed read-state change in the loaded list.
    pub fn set_read(&mut self, observation_id: i64, read: bool) {
        if let LoadState::Loaded { data, .. } = &mut self.load {
            if let Some(obs) = data.observaciones.iter_mut().find(|o| o.id == observation_id) {
                obs.leido = read;
            }
        }
    }

    /// Claim the read toggle of an observation. `false` if already pending.
    pub fn begin_read(&mut self, observation_id: i64) -> bool {
        self.pending.insert(observation_id)
    }

    /// Settle a read toggle; `confirmed` is the server's flag on success.
    pub fn finish_read(&mut self, observation_id: i64, confirmed: Option<bool>) {
        self.pending.remove(&observation_id);
        if let Some(read) = confirmed {
            self.set_read(observation_id, read);
        }
    }

    #[must_use]
    pub fn is_read_pending(&self, observation_id: i64) -> bool {
        self.pending.contains(&observation_id)
    }
}
