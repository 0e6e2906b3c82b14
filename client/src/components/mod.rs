//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal widgets and read/write shared page state from
//! Leptos context providers.

pub mod child_selector;
pub mod info_card;
pub mod multimedia_modal;
pub mod observation_card;
pub mod read_stats_panel;
pub mod read_toggle_button;
pub mod registration_form;
pub mod toast_stack;
