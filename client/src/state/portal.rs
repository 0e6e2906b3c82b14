//! Page state for the guardian dashboard.
//!
//! ARCHITECTURE
//! ============
//! The dashboard page owns one `RwSignal<PortalState>` and provides it as
//! context. The child selector, the observation cards and the multimedia
//! modal read it through the accessors below, and the page is the only place
//! that turns a [`ChildSelected`] into a load.

#[cfg(test)]
#[path = "portal_test.rs"]
mod portal_test;

use super::child_selector::{ChildSelected, ChildSelectorState};
use super::dashboard::DashboardState;
use super::media_modal::MediaModal;
use crate::net::types::{Child, Observation};

#[derive(Clone, Debug, Default)]
pub struct PortalState {
    pub selector: ChildSelectorState,
    pub dashboard: DashboardState,
    pub modal: MediaModal,
}

impl PortalState {
    #[must_use]
    pub fn selected_child(&self) -> Option<&Child> {
        self.selector.selected()
    }

    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        self.dashboard.observations()
    }

    /// React to a selection: start loading that child. Returns the id to fetch.
    pub fn on_child_selected(&mut self, event: &ChildSelected) -> i64 {
        self.modal.close();
        self.dashboard.begin_load(event.child_id);
        event.child_id
    }

    /// Re-run the load for the selected child, if any. Returns the id to fetch.
    pub fn refresh(&mut self) -> Option<i64> {
        let child_id = self.selector.selected_id.or_else(|| self.dashboard.current_child_id())?;
        self.dashboard.begin_load(child_id);
        Some(child_id)
    }
}
