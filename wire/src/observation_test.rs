use super::*;

fn obs(id: i64, tipo: &str, fotos: bool, videos: bool) -> Observation {
    Observation {
        id,
        fecha: "2024-03-01 08:15:00".to_owned(),
        tipo: ObservationKind::from(tipo.to_owned()),
        descripcion: "Participó en clase".to_owned(),
        fotos,
        videos,
        profesor: None,
        leido: false,
    }
}

// =============================================================================
// ObservationKind
// =============================================================================

#[test]
fn kind_parses_known_values() {
    assert_eq!(ObservationKind::from("Positiva".to_owned()), ObservationKind::Positiva);
    assert_eq!(ObservationKind::from("Mejora".to_owned()), ObservationKind::Mejora);
    assert_eq!(ObservationKind::from("Neutral".to_owned()), ObservationKind::Neutral);
}

#[test]
fn kind_keeps_unknown_value() {
    let kind = ObservationKind::from("Disciplinaria".to_owned());
    assert_eq!(kind, ObservationKind::Other("Disciplinaria".to_owned()));
    assert_eq!(kind.as_str(), "Disciplinaria");
    assert_eq!(String::from(kind), "Disciplinaria");
}

#[test]
fn kind_icons_match_category() {
    assert_eq!(ObservationKind::Positiva.icon_class(), "fa-smile");
    assert_eq!(ObservationKind::Mejora.icon_class(), "fa-exclamation-triangle");
    assert_eq!(ObservationKind::Neutral.icon_class(), "fa-info-circle");
    assert_eq!(ObservationKind::Other("x".into()).icon_class(), "fa-clipboard");
}

#[test]
fn kind_serializes_as_plain_string() {
    let json = serde_json::to_value(ObservationKind::Mejora).unwrap();
    assert_eq!(json, serde_json::json!("Mejora"));
}

// =============================================================================
// preview
// =============================================================================

#[test]
fn preview_keeps_short_text() {
    assert_eq!(preview_text("hola", 100), "hola");
}

#[test]
fn preview_keeps_exact_limit() {
    let text = "a".repeat(100);
    assert_eq!(preview_text(&text, 100), text);
}

#[test]
fn preview_truncates_long_text() {
    let text = "b".repeat(150);
    let preview = preview_text(&text, 100);
    assert_eq!(preview.len(), 103);
    assert!(preview.ends_with("..."));
}

#[test]
fn preview_counts_characters_not_bytes() {
    let text = "ñ".repeat(101);
    let preview = preview_text(&text, 100);
    assert_eq!(preview.chars().count(), 103);
    assert!(preview.starts_with("ññ"));
}

// =============================================================================
// Observation / ChildObservations
// =============================================================================

#[test]
fn observation_without_media_flags_has_no_multimedia() {
    assert!(!obs(1, "Neutral", false, false).has_multimedia());
    assert!(obs(2, "Neutral", true, false).has_multimedia());
    assert!(obs(3, "Neutral", false, true).has_multimedia());
}

#[test]
fn observation_missing_optional_fields_defaults() {
    let raw = r#"{"id":7,"fecha":"2024-01-01 10:00:00","tipo":"Positiva","descripcion":"Bien"}"#;
    let parsed: Observation = serde_json::from_str(raw).unwrap();
    assert!(!parsed.fotos);
    assert!(!parsed.videos);
    assert!(!parsed.leido);
    assert_eq!(parsed.profesor, None);
}

#[test]
fn child_observations_counts_positive_and_multimedia() {
    let payload = ChildObservations::from_observations(vec![
        obs(1, "Positiva", true, false),
        obs(2, "Mejora", false, false),
        obs(3, "Positiva", false, false),
        obs(4, "Neutral", false, true),
    ]);
    assert_eq!(payload.total, 4);
    assert_eq!(payload.positivas, 2);
    assert_eq!(payload.multimedia, 2);
}

#[test]
fn child_observations_empty_payload_parses() {
    let parsed: ChildObservations = serde_json::from_str(r#"{"observaciones":[],"total":0}"#).unwrap();
    assert!(parsed.is_empty());
    assert_eq!(parsed.positivas, 0);
}
