use super::*;

fn image(id: i64) -> MultimediaAsset {
    MultimediaAsset::from_stored(id, &format!("foto{id}.jpg"), None, &format!("uploads/foto{id}.jpg"), 2048)
}

fn video(id: i64) -> MultimediaAsset {
    MultimediaAsset::from_stored(id, &format!("clip{id}.mp4"), None, &format!("clip{id}.mp4"), 1_048_576)
}

#[test]
fn open_starts_loading() {
    let mut m = MediaModal::default();
    assert!(!m.is_open());
    m.open(3, MediaKind::Video);
    assert!(m.is_open());
    assert_eq!(m.phase, ModalPhase::Loading);
    assert_eq!(m.title(), "Videos de la Observación");
}

#[test]
fn two_images_viewed_as_videos_is_empty_kind_not_error() {
    let mut m = MediaModal::default();
    m.open(3, MediaKind::Video);
    m.apply(3, Ok(vec![image(1), image(2)]));
    assert_eq!(m.phase, ModalPhase::EmptyKind);
    assert_eq!(m.kind.empty_message(), "No hay videos");
}

#[test]
fn empty_list_is_no_files() {
    let mut m = MediaModal::default();
    m.open(3, MediaKind::Image);
    m.apply(3, Ok(Vec::new()));
    assert_eq!(m.phase, ModalPhase::NoFiles);
}

#[test]
fn gallery_keeps_only_requested_kind() {
    let mut m = MediaModal::default();
    m.open(3, MediaKind::Image);
    m.apply(3, Ok(vec![image(1), video(2), image(3)]));
    let ModalPhase::Gallery(items) = &m.phase else {
        panic!("expected gallery, got {:?}", m.phase);
    };
    assert_eq!(items.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn fetch_error_offers_retry() {
    let mut m = MediaModal::default();
    m.open(3, MediaKind::Image);
    m.apply(3, Err(ApiError::Server("Error al cargar multimedia".to_owned())));
    assert_eq!(m.phase, ModalPhase::Error("Error al cargar multimedia".to_owned()));

    assert_eq!(m.retry(), Some(3));
    assert_eq!(m.phase, ModalPhase::Loading);
}

#[test]
fn stale_result_for_other_observation_is_ignored() {
    let mut m = MediaModal::default();
    m.open(3, MediaKind::Image);
    m.apply(4, Ok(vec![image(1)]));
    assert_eq!(m.phase, ModalPhase::Loading);
}

#[test]
fn result_after_close_is_ignored() {
    let mut m = MediaModal::default();
    m.open(3, MediaKind::Image);
    m.close();
    m.apply(3, Ok(vec![image(1)]));
    assert_eq!(m.phase, ModalPhase::Closed);
}

#[test]
fn fullscreen_only_for_images() {
    let mut m = MediaModal::default();
    m.open(3, MediaKind::Image);
    m.open_fullscreen(&video(2));
    assert_eq!(m.fullscreen, None);

    m.open_fullscreen(&image(1));
    assert_eq!(m.fullscreen.as_ref().map(|f| f.url.as_str()), Some("/uploads/foto1.jpg"));
    m.close_fullscreen();
    assert_eq!(m.fullscreen, None);
}

#[test]
fn close_resets_everything() {
    let mut m = MediaModal::default();
    m.open(3, MediaKind::Video);
    m.close();
    assert!(!m.is_open());
    assert_eq!(m.observation_id, None);
    assert_eq!(m.retry(), None);
}
