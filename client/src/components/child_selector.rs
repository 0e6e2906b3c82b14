//! Child selector dropdown for the guardian dashboard.

use leptos::prelude::*;

use crate::state::child_selector::{ChildSelected, EMPTY_LABEL, LOADING_LABEL, SelectorPhase};
use crate::state::portal::PortalState;

/// Dropdown over the guardian's children.
///
/// Opening with an empty cache fetches `/acudiente/api/hijos-temp`; picking a
/// child runs `on_select`.
#[component]
pub fn ChildSelector(on_select: Callback<ChildSelected>) -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();

    let fetch = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_children().await;
            if let Err(e) = &result {
                log::warn!("children fetch failed: {e}");
            }
            portal.update(|p| p.selector.apply_fetch(result));
        });
    };

    let on_toggle = move |_| {
        let mut needs_fetch = false;
        portal.update(|p| needs_fetch = p.selector.toggle());
        if needs_fetch {
            fetch();
        }
    };
    let on_retry = move |_| {
        portal.update(|p| p.selector.retry());
        fetch();
    };
    let on_fallback = move |_| portal.update(|p| p.selector.use_fallback_data());
    let pick = move |child_id: i64| {
        let mut event = None;
        portal.update(|p| event = p.selector.select(child_id));
        if let Some(event) = event {
            on_select.run(event);
        }
    };

    let phase = move || portal.get().selector.phase;

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            portal.update(|p| p.selector.close());
        }
    };

    view! {
        <Show when=move || portal.get().selector.is_open()>
            <div class="dropdown-backdrop" on:click=move |_| portal.update(|p| p.selector.close())></div>
        </Show>
        <div
            class="selector-hijos"
            class:show=move || portal.get().selector.is_open()
            on:keydown=on_keydown
        >
            <button
                class="btn btn-outline-primary dropdown-toggle"
                aria-haspopup="listbox"
                aria-expanded=move || portal.get().selector.is_open().to_string()
                on:click=on_toggle
            >
                <i class="fas fa-child"></i>
                " "
                {move || portal.get().selector.button_label()}
            </button>
            <Show when=move || portal.get().selector.is_open()>
                <div class="dropdown-menu show" role="listbox">
                    {move || match phase() {
                        SelectorPhase::Closed => ().into_any(),
                        SelectorPhase::Loading => {
                            view! {
                                <span class="dropdown-item-text">
                                    <i class="fas fa-spinner fa-spin"></i>
                                    " "
                                    {LOADING_LABEL}
                                </span>
                            }
                                .into_any()
                        }
                        SelectorPhase::Errored(message) => {
                            view! {
                                <div class="dropdown-item-text text-danger">
                                    <p>{message}</p>
                                    <button class="btn btn-sm btn-primary" on:click=on_retry>"Reintentar"</button>
                                    " "
                                    <button class="btn btn-sm btn-secondary" on:click=on_fallback>
                                        "Usar datos de prueba"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                        SelectorPhase::Loaded => {
                            let state = portal.get().selector;
                            if state.children.is_empty() {
                                return view! { <span class="dropdown-item-text">{EMPTY_LABEL}</span> }.into_any();
                            }
                            let selected = state.selected_id;
                            let fallback_note = state
                                .is_fallback
                                .then(|| {
                                    view! {
                                        <span class="dropdown-item-text text-muted small">
                                            "Datos de prueba (sin conexión)"
                                        </span>
                                    }
                                });
                            view! {
                                {fallback_note}
                                {state
                                    .children
                                    .into_iter()
                                    .map(|child| {
                                        let id = child.id;
                                        view! {
                                            <button
                                                class="dropdown-item"
                                                class:active=selected == Some(id)
                                                role="option"
                                                on:click=move |_| pick(id)
                                            >
                                                <strong>{child.nombre}</strong>
                                                <small class="text-muted">" · " {child.grado}</small>
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            }
                                .into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
