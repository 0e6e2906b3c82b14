//! Client state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain data type with pure transition methods. Pages wrap
//! them in `RwSignal`s and provide them through Leptos context, so every
//! state machine here is testable without a browser.

pub mod auth;
pub mod cards;
pub mod child_selector;
pub mod dashboard;
pub mod format;
pub mod media_modal;
pub mod portal;
pub mod reading;
pub mod registration;
pub mod report;
pub mod stats;
pub mod toast;
