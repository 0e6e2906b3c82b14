//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business rules and SQL so route handlers can stay
//! focused on extraction, auth plumbing and status mapping.

pub mod access_code;
pub mod multimedia;
pub mod observation;
pub mod reading;
pub mod registration;
pub mod session;
pub mod student;
