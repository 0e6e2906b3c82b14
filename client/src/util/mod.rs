//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (redirects, timers, file
//! downloads) from page and component logic.

pub mod auth;
pub mod download;
pub mod notify;
