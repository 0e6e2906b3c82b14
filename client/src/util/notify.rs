//! Toast helper: push a message and dismiss it after a delay.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Show a toast for [`TOAST_DURATION_MS`](crate::state::toast::TOAST_DURATION_MS).
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::toast::TOAST_DURATION_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
