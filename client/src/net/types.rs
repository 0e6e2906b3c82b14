//! Client-side DTOs for the portal endpoints.
//!
//! DESIGN
//! ======
//! Payload types live in the `wire` crate so the server and the browser agree
//! on one schema; this module re-exports them and adds the session user,
//! which only the client deserializes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use wire::{
    Child, ChildObservations, CodeRequest, CodeVerify, LoginIdentifier, LoginMethod, MediaKind, MultimediaAsset,
    Observation, ObservationKind, ReadAction, ReadStatistics, ReadingRow, RegistrationRequest,
};

/// Authenticated user returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// `acudiente`, `profesor` or `admin`.
    pub role: String,
}

impl User {
    #[must_use]
    pub fn is_guardian(&self) -> bool {
        self.role == "acudiente"
    }

    /// Landing route after login for this user's role.
    #[must_use]
    pub fn home_route(&self) -> &'static str {
        if self.is_guardian() { "/acudiente" } else { "/lectura" }
    }
}
