use super::*;

// =============================================================================
// format_file_size
// =============================================================================

#[test]
fn format_zero_bytes() {
    assert_eq!(format_file_size(0), "0 B");
}

#[test]
fn format_bytes_keeps_decimal() {
    assert_eq!(format_file_size(512), "512.0 B");
}

#[test]
fn format_kilobytes() {
    assert_eq!(format_file_size(1536), "1.5 KB");
}

#[test]
fn format_megabytes() {
    assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
}

#[test]
fn format_caps_at_gigabytes() {
    assert_eq!(format_file_size(2048 * 1024 * 1024 * 1024), "2048.0 GB");
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn classify_by_extension() {
    assert_eq!(classify(None, "foto.JPG"), Some(MediaKind::Image));
    assert_eq!(classify(None, "clip.webm"), Some(MediaKind::Video));
    assert_eq!(classify(None, "notas.pdf"), None);
    assert_eq!(classify(None, "sin_extension"), None);
}

#[test]
fn classify_file_type_wins_over_extension() {
    assert_eq!(classify(Some("video"), "raro.png"), Some(MediaKind::Video));
    assert_eq!(classify(Some("image"), "clip.mp4"), Some(MediaKind::Image));
}

#[test]
fn classify_unknown_file_type_falls_back_to_extension() {
    assert_eq!(classify(Some("document"), "foto.gif"), Some(MediaKind::Image));
}

// =============================================================================
// file_url / from_stored
// =============================================================================

#[test]
fn file_url_keeps_uploads_prefix() {
    assert_eq!(file_url("uploads/obs/1/a.jpg"), "/uploads/obs/1/a.jpg");
}

#[test]
fn file_url_adds_uploads_prefix() {
    assert_eq!(file_url("obs/1/a.jpg"), "/uploads/obs/1/a.jpg");
    assert_eq!(file_url("/obs/1/a.jpg"), "/uploads/obs/1/a.jpg");
}

#[test]
fn stored_asset_flags_are_exclusive() {
    let image = MultimediaAsset::from_stored(1, "a.png", None, "a.png", 2048);
    assert!(image.is_image);
    assert!(!image.is_video);
    assert_eq!(image.formatted_size, "2.0 KB");
    assert_eq!(image.url, "/uploads/a.png");

    let other = MultimediaAsset::from_stored(2, "a.txt", None, "a.txt", 10);
    assert!(!other.is_image);
    assert!(!other.is_video);
}

#[test]
fn kind_filter_matches_flags() {
    let image = MultimediaAsset::from_stored(1, "a.png", None, "a.png", 1);
    assert!(MediaKind::Image.matches(&image));
    assert!(!MediaKind::Video.matches(&image));
}

#[test]
fn response_without_data_defaults_empty() {
    let resp: MultimediaResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
    assert!(resp.success);
    assert!(resp.data.is_empty());
}
