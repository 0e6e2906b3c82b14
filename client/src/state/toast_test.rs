use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "uno");
    let b = state.push(ToastKind::Error, "dos");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[1].message, "dos");
}

#[test]
fn dismiss_removes_only_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "guardado");
    let b = state.push(ToastKind::Error, "fallo");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastKind::Warning, "aviso");
    state.dismiss(99);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn errors_render_as_danger_alerts() {
    assert_eq!(ToastKind::Error.css_class(), "alert alert-danger");
    assert_eq!(ToastKind::Success.css_class(), "alert alert-success");
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b");
    assert_ne!(a, b);
}
