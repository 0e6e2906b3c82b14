use super::*;
use crate::net::types::{ChildObservations, ObservationKind};

fn observation(id: i64) -> Observation {
    Observation {
        id,
        fecha: "2024-03-15 14:30:00".to_owned(),
        tipo: ObservationKind::Positiva,
        descripcion: "Ayudó a un compañero".to_owned(),
        fotos: false,
        videos: false,
        profesor: None,
        leido: true,
    }
}

#[test]
fn filename_joins_name_with_underscores() {
    assert_eq!(report_filename("María  José García", "2024-05-02"), "observaciones_María_José_García_2024-05-02.txt");
}

#[test]
fn blank_name_uses_generic_label() {
    assert_eq!(report_filename("  ", "2024-05-02"), "observaciones_hijo_2024-05-02.txt");
}

#[test]
fn report_lists_each_observation() {
    let child = Child::new(1, "Angelo Curiel", "Preescolar");
    let body = render_report(&child, &[observation(1), observation(2)], "2024-05-02");
    assert!(body.starts_with("Reporte de Observaciones"));
    assert!(body.contains("Hijo: Angelo Curiel"));
    assert!(body.contains("Observaciones: 2"));
    assert_eq!(body.matches("Ayudó a un compañero").count(), 2);
    assert!(body.contains("15 de marzo de 2024, 14:30"));
}

#[test]
fn export_refuses_without_selection() {
    let state = PortalState::default();
    assert_eq!(build_report(&state, "2024-05-02"), Err(ExportError::NoChildSelected));
}

#[test]
fn export_uses_selected_child_and_loaded_observations() {
    let mut state = PortalState::default();
    state.selector.open();
    state.selector.apply_fetch(Ok(vec![Child::new(3, "Juan Pérez", "Segundo")]));
    let event = state.selector.select(3).unwrap();
    state.on_child_selected(&event);
    state.dashboard.finish_load(3, Ok(ChildObservations::from_observations(vec![observation(8)])));

    let report = build_report(&state, "2024-05-02").unwrap();
    assert_eq!(report.filename, "observaciones_Juan_Pérez_2024-05-02.txt");
    assert!(report.body.contains("Observaciones: 1"));
}
