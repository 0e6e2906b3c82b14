//! Read/unread button shared by the reading table and dashboard cards.
//!
//! The button disables itself and shows a processing label while its request
//! is in flight; the caller owns the request and the pending flag.

use leptos::prelude::*;

use crate::state::reading::{PROCESSING_LABEL, visual_for};

#[component]
pub fn ReadToggleButton(
    #[prop(into)] read: Signal<bool>,
    #[prop(into)] pending: Signal<bool>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let visual = move || visual_for(read.get());

    view! {
        <button
            class=move || visual().button_class
            disabled=move || pending.get()
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.stop_propagation();
                if !pending.get_untracked() {
                    on_toggle.run(());
                }
            }
        >
            <i class=move || if pending.get() { "fas fa-spinner fa-spin" } else { visual().button_icon }></i>
            " "
            {move || if pending.get() { PROCESSING_LABEL } else { visual().button_label }}
        </button>
    }
}

/// Read/unread badge.
#[component]
pub fn ReadBadge(#[prop(into)] read: Signal<bool>) -> impl IntoView {
    let visual = move || visual_for(read.get());
    view! {
        <span class=move || visual().badge_class>
            <i class=move || visual().badge_icon></i>
            " "
            {move || visual().badge_text}
        </span>
    }
}
