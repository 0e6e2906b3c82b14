//! Multimedia attachments of an observation.

use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "webm"];
const SIZE_UNITS: &[&str] = &["B", "KB", "MB", "GB"];

/// Which kind of asset a viewer asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Gallery title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Image => "Fotos",
            Self::Video => "Videos",
        }
    }

    /// Message shown when the observation has files but none of this kind.
    #[must_use]
    pub fn empty_message(self) -> &'static str {
        match self {
            Self::Image => "No hay fotos",
            Self::Video => "No hay videos",
        }
    }

    #[must_use]
    pub fn matches(self, asset: &MultimediaAsset) -> bool {
        match self {
            Self::Image => asset.is_image,
            Self::Video => asset.is_video,
        }
    }
}

/// One stored file, as returned by `GET /api/observaciones/{id}/multimedia`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultimediaAsset {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub file_size: u64,
    pub url: String,
    pub formatted_size: String,
    #[serde(default)]
    pub is_image: bool,
    #[serde(default)]
    pub is_video: bool,
}

impl MultimediaAsset {
    /// Build an asset from a stored row, deriving url, size label and kind.
    #[must_use]
    pub fn from_stored(id: i64, filename: &str, file_type: Option<&str>, file_path: &str, file_size: u64) -> Self {
        let kind = classify(file_type, filename);
        Self {
            id,
            filename: filename.to_owned(),
            file_type: file_type.map(str::to_owned),
            file_path: file_path.to_owned(),
            file_size,
            url: file_url(file_path),
            formatted_size: format_file_size(file_size),
            is_image: kind == Some(MediaKind::Image),
            is_video: kind == Some(MediaKind::Video),
        }
    }
}

/// Response envelope for the multimedia endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultimediaResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<MultimediaAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Classify a file. An explicit `file_type` of `image`/`video` wins over the
/// extension; anything unrecognised is neither.
#[must_use]
pub fn classify(file_type: Option<&str>, filename: &str) -> Option<MediaKind> {
    match file_type.map(str::trim).map(str::to_ascii_lowercase).as_deref() {
        Some("image") => return Some(MediaKind::Image),
        Some("video") => return Some(MediaKind::Video),
        _ => {}
    }
    let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

/// Public URL of a stored file. Paths already rooted at `uploads/` are kept.
#[must_use]
pub fn file_url(file_path: &str) -> String {
    let path = file_path.trim_start_matches('/');
    if path.starts_with("uploads/") {
        format!("/{path}")
    } else {
        format!("/uploads/{path}")
    }
}

/// Human-readable size with one decimal, e.g. `1.5 KB`.
#[must_use]
pub fn format_file_size(size_bytes: u64) -> String {
    if size_bytes == 0 {
        return "0 B".to_owned();
    }
    #[allow(clippy::cast_precision_loss)]
    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.1} {}", SIZE_UNITS[unit])
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
