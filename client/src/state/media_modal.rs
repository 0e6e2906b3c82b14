//! Multimedia modal state for one observation's photos or videos.

#[cfg(test)]
#[path = "media_modal_test.rs"]
mod media_modal_test;

use crate::net::api::ApiError;
use crate::net::types::{MediaKind, MultimediaAsset};

pub const LOADING_MESSAGE: &str = "Cargando archivos multimedia...";
pub const NO_FILES_TITLE: &str = "No hay archivos";
pub const NO_FILES_MESSAGE: &str = "Esta observación no tiene archivos multimedia.";
pub const ERROR_TITLE: &str = "Error al cargar archivos";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Loading,
    /// Fetch failed; offers Retry.
    Error(String),
    /// The observation has no files at all.
    NoFiles,
    /// Files exist but none of the requested kind.
    EmptyKind,
    Gallery(Vec<MultimediaAsset>),
}

/// Image shown full-screen on top of the gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullscreenImage {
    pub url: String,
    pub filename: String,
}

#[derive(Clone, Debug)]
pub struct MediaModal {
    pub observation_id: Option<i64>,
    pub kind: MediaKind,
    pub phase: ModalPhase,
    pub fullscreen: Option<FullscreenImage>,
}

impl Default for MediaModal {
    fn default() -> Self {
        Self { observation_id: None, kind: MediaKind::Image, phase: ModalPhase::Closed, fullscreen: None }
    }
}

impl MediaModal {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// Open for `observation_id` in Loading; the caller fetches.
    pub fn open(&mut self, observation_id: i64, kind: MediaKind) {
        self.observation_id = Some(observation_id);
        self.kind = kind;
        self.phase = ModalPhase::Loading;
        self.fullscreen = None;
    }

    /// Store the fetch outcome for `observation_id`.
    ///
    /// Ignored unless the modal is still loading that observation.
    pub fn apply(&mut self, observation_id: i64, result: Result<Vec<MultimediaAsset>, ApiError>) {
        if self.phase != ModalPhase::Loading || self.observation_id != Some(observation_id) {
            return;
        }
        self.phase = match result {
            Err(e) => ModalPhase::Error(e.to_string()),
            Ok(assets) if assets.is_empty() => ModalPhase::NoFiles,
            Ok(assets) => {
                let kind = self.kind;
                let matching: Vec<MultimediaAsset> = assets.into_iter().filter(|a| kind.matches(a)).collect();
                if matching.is_empty() { ModalPhase::EmptyKind } else { ModalPhase::Gallery(matching) }
            }
        };
    }

    /// Back to Loading for the same observation; returns what to fetch.
    pub fn retry(&mut self) -> Option<i64> {
        let id = self.observation_id?;
        self.phase = ModalPhase::Loading;
        Some(id)
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn open_fullscreen(&mut self, asset: &MultimediaAsset) {
        if asset.is_image {
            self.fullscreen = Some(FullscreenImage { url: asset.url.clone(), filename: asset.filename.clone() });
        }
    }

    pub fn close_fullscreen(&mut self) {
        self.fullscreen = None;
    }

    /// `Fotos de la Observación` / `Videos de la Observación`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} de la Observación", self.kind.title())
    }

    /// Body text for [`ModalPhase::EmptyKind`].
    #[must_use]
    pub fn empty_kind_message(&self) -> &'static str {
        match self.kind {
            MediaKind::Image => "Esta observación no tiene imágenes.",
            MediaKind::Video => "Esta observación no tiene videos.",
        }
    }
}
