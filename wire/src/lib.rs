//! Shared JSON schema for the guardian portal.
//!
//! This crate owns the wire representation used by both `server` and `client`:
//! observations, children, read statistics, multimedia assets, login bodies
//! and the registration payload. Field names follow the JSON the portal has always
//! spoken (`observaciones`, `hijos`, `leido`, ...), so serde renames live here
//! and nowhere else.
//!
//! Validation rules that both sides must agree on (login identifiers,
//! registration form, asset classification, size formatting) also live here
//! so the browser and the server reject the same inputs.

pub mod child;
pub mod login;
pub mod media;
pub mod observation;
pub mod reading;
pub mod registration;

use serde::{Deserialize, Serialize};

pub use child::{Child, ChildrenResponse};
pub use login::{CodeRequest, CodeRequestResponse, CodeVerify, LoginError, LoginIdentifier, LoginMethod, LoginResponse};
pub use media::{MediaKind, MultimediaAsset, MultimediaResponse};
pub use observation::{ChildObservations, Observation, ObservationKind};
pub use reading::{
    ReadAction, ReadStateResponse, ReadStatistics, ReadingListResponse, ReadingRow, StatisticsResponse,
};
pub use registration::{
    RegistrationError, RegistrationField, RegistrationForm, RegistrationRequest, RegistrationResponse,
};

/// Body returned by every endpoint when a request fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
