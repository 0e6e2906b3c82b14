use super::*;

fn server_children() -> Vec<Child> {
    vec![Child::new(10, "Sofía Rojas", "Tercero"), Child::new(11, "Tomás Rojas", "Quinto")]
}

fn loaded() -> ChildSelectorState {
    let mut s = ChildSelectorState::default();
    s.open();
    s.apply_fetch(Ok(server_children()));
    s
}

// =============================================================
// open / close
// =============================================================

#[test]
fn starts_closed_with_placeholder() {
    let s = ChildSelectorState::default();
    assert!(!s.is_open());
    assert_eq!(s.button_label(), PLACEHOLDER_LABEL);
}

#[test]
fn first_open_requests_fetch() {
    let mut s = ChildSelectorState::default();
    assert!(s.open());
    assert_eq!(s.phase, SelectorPhase::Loading);
}

#[test]
fn reopen_with_cache_skips_fetch() {
    let mut s = loaded();
    s.close();
    assert!(!s.open());
    assert_eq!(s.phase, SelectorPhase::Loaded);
}

#[test]
fn toggle_closes_open_dropdown() {
    let mut s = loaded();
    assert!(!s.toggle());
    assert!(!s.is_open());
}

// =============================================================
// apply_fetch
// =============================================================

#[test]
fn server_children_are_used_as_is() {
    let s = loaded();
    assert_eq!(s.children, server_children());
    assert!(!s.is_fallback);
    assert_eq!(s.phase, SelectorPhase::Loaded);
}

#[test]
fn timeout_falls_back_to_three_demo_children() {
    let mut s = ChildSelectorState::default();
    s.open();
    s.apply_fetch(Err(ApiError::Timeout));

    assert!(s.is_fallback);
    let names: Vec<(&str, &str)> = s.children.iter().map(|c| (c.nombre.as_str(), c.grado.as_str())).collect();
    assert_eq!(
        names,
        vec![("Angelo Curiel", "Preescolar"), ("María García", "Primero"), ("Juan Pérez", "Segundo")]
    );
    assert_eq!(s.phase, SelectorPhase::Loaded);
}

#[test]
fn network_failure_falls_back() {
    let mut s = ChildSelectorState::default();
    s.open();
    s.apply_fetch(Err(ApiError::Network("Failed to fetch".to_owned())));
    assert!(s.is_fallback);
    assert_eq!(s.children.len(), 3);
}

#[test]
fn empty_result_falls_back() {
    let mut s = ChildSelectorState::default();
    s.open();
    s.apply_fetch(Ok(Vec::new()));
    assert!(s.is_fallback);
    assert_eq!(s.children, fallback_children());
}

#[test]
fn server_error_is_shown_not_masked() {
    let mut s = ChildSelectorState::default();
    s.open();
    s.apply_fetch(Err(ApiError::Server("No autorizado".to_owned())));
    assert_eq!(s.phase, SelectorPhase::Errored("No autorizado".to_owned()));
    assert!(s.children.is_empty());
    assert!(!s.is_fallback);
}

#[test]
fn use_fallback_after_error_loads_demo_list() {
    let mut s = ChildSelectorState::default();
    s.open();
    s.apply_fetch(Err(ApiError::Server("boom".to_owned())));
    s.use_fallback_data();
    assert_eq!(s.phase, SelectorPhase::Loaded);
    assert!(s.is_fallback);
}

#[test]
fn retry_goes_back_to_loading() {
    let mut s = ChildSelectorState::default();
    s.open();
    s.apply_fetch(Err(ApiError::Server("boom".to_owned())));
    s.retry();
    assert_eq!(s.phase, SelectorPhase::Loading);
}

#[test]
fn late_result_after_close_fills_cache_without_reopening() {
    let mut s = ChildSelectorState::default();
    s.open();
    s.close();
    s.apply_fetch(Ok(server_children()));
    assert!(!s.is_open());
    assert_eq!(s.children.len(), 2);
}

// =============================================================
// select
// =============================================================

#[test]
fn select_closes_and_notifies() {
    let mut s = loaded();
    let event = s.select(11).unwrap();
    assert_eq!(event.child_id, 11);
    assert_eq!(event.child.nombre, "Tomás Rojas");
    assert!(!s.is_open());
    assert_eq!(s.button_label(), "Tomás Rojas");
}

#[test]
fn reselecting_same_child_only_closes() {
    let mut s = loaded();
    s.select(10);
    s.open();
    assert_eq!(s.select(10), None);
    assert!(!s.is_open());
    assert_eq!(s.selected_id, Some(10));
}

#[test]
fn selecting_unknown_child_is_ignored() {
    let mut s = loaded();
    assert_eq!(s.select(99), None);
    assert_eq!(s.selected_id, None);
}

#[test]
fn selection_is_single_valued() {
    let mut s = loaded();
    s.select(10);
    s.open();
    s.select(11);
    assert_eq!(s.selected_id, Some(11));
    assert_eq!(s.selected().map(|c| c.id), Some(11));
}
