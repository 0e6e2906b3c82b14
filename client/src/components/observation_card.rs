//! Expandable observation card on the guardian dashboard.

use leptos::prelude::*;

use super::read_toggle_button::{ReadBadge, ReadToggleButton};
#[cfg(feature = "hydrate")]
use super::read_stats_panel::refresh_statistics;
#[cfg(feature = "hydrate")]
use crate::net::types::ReadAction;
use crate::net::types::{MediaKind, Observation};
use crate::state::cards::is_toggle_key;
use crate::state::dashboard::{NO_MEDIA_LABEL, media_buttons};
use crate::state::format::format_full_date;
use crate::state::portal::PortalState;
use crate::state::stats::StatsState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::{state::toast::ToastKind, util::notify::notify};

#[component]
pub fn ObservationCard(observation: Observation, on_open_media: Callback<(i64, MediaKind)>) -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let stats = expect_context::<RwSignal<StatsState>>();
    let id = observation.id;

    let expanded = Memo::new(move |_| portal.with(|p| p.dashboard.is_expanded(id)));
    let read = Memo::new(move |_| portal.with(|p| p.observations().iter().find(|o| o.id == id).is_some_and(|o| o.leido)));
    let pending = Memo::new(move |_| portal.with(|p| p.dashboard.is_read_pending(id)));

    let toggle = move || portal.update(|p| p.dashboard.toggle_card(id));
    let on_toggle_read = Callback::new(move |()| {
        let mut claimed = false;
        portal.update(|p| claimed = p.dashboard.begin_read(id));
        if !claimed {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_read_state(id, ReadAction::Toggle).await {
                Ok(change) => {
                    portal.update(|p| p.dashboard.finish_read(id, Some(change.read)));
                    if let Some(message) = change.message {
                        notify(toasts, ToastKind::Success, message);
                    }
                    refresh_statistics(stats);
                }
                Err(e) => {
                    portal.update(|p| p.dashboard.finish_read(id, None));
                    log::warn!("read-state toggle for observation {id} failed: {e}");
                    notify(toasts, ToastKind::Error, e.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (toasts, stats);
    });

    let kind_modifier = observation.tipo.css_modifier();
    let buttons = media_buttons(&observation);
    let media = if buttons.is_empty() {
        view! {
            <span class="sin-multimedia text-muted">
                <i class="fas fa-ban"></i>
                " "
                {NO_MEDIA_LABEL}
            </span>
        }
        .into_any()
    } else {
        buttons
            .into_iter()
            .map(|button| {
                view! {
                    <button
                        class="btn btn-sm btn-outline-info"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            on_open_media.run((id, button.kind));
                        }
                    >
                        <i class=button.icon></i>
                        " "
                        {button.label}
                    </button>
                }
            })
            .collect_view()
            .into_any()
    };

    let author = observation.profesor.clone().unwrap_or_else(|| "Profesor".to_owned());
    let preview = observation.preview();
    let full = observation.descripcion.clone();

    view! {
        <article class=format!("observacion-card observacion-card--{kind_modifier}")>
            <header
                class="observacion-card__header"
                role="button"
                tabindex="0"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| toggle()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if is_toggle_key(&ev.key()) {
                        ev.prevent_default();
                        toggle();
                    }
                }
            >
                <i class=format!("fas {}", observation.tipo.icon_class())></i>
                <span class="observacion-card__tipo">{observation.tipo.as_str().to_owned()}</span>
                <span class="observacion-card__fecha">{format_full_date(&observation.fecha)}</span>
                <ReadBadge read=read />
                <i class=move || if expanded.get() { "fas fa-chevron-up" } else { "fas fa-chevron-down" }></i>
            </header>
            <div class="observacion-card__body">
                <p class="observacion-card__descripcion">
                    {move || if expanded.get() { full.clone() } else { preview.clone() }}
                </p>
                <Show when=move || expanded.get()>
                    <p class="observacion-card__profesor text-muted">
                        {author.clone()}
                    </p>
                </Show>
            </div>
            <footer class="observacion-card__footer">
                {media}
                <ReadToggleButton read=read pending=pending on_toggle=on_toggle_read />
            </footer>
        </article>
    }
}
