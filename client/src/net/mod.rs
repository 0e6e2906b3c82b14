//! Networking modules for the portal's JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps every HTTP call the pages make and `types` re-exports the
//! shared `wire` schema plus client-only session types.

pub mod api;
pub mod types;
