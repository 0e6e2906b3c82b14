//! Read-tracking page: observation table, per-row read toggles, bulk
//! mark-as-read and the statistics panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every row change is applied only after the server confirms it, then the
//! statistics are re-read. Rows update independently; only the row whose
//! request is in flight is disabled.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::read_stats_panel::{ReadStatsPanel, refresh_statistics};
use crate::components::read_toggle_button::{ReadBadge, ReadToggleButton};
use crate::state::auth::AuthState;
use crate::state::format::format_full_date;
use crate::state::reading::{ReadFilter, ReadingState, visual_for};
use crate::state::stats::StatsState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::{state::toast::ToastKind, util::notify::notify};
use crate::util::auth::install_unauth_redirect;

#[cfg(feature = "hydrate")]
const BULK_FAILURE: &str = "Error al marcar observaciones";

fn load_rows(reading: RwSignal<ReadingState>) {
    reading.update(|r| r.loading = true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_reading_list().await {
            Ok(rows) => reading.update(|r| r.set_rows(rows)),
            Err(e) => reading.update(|r| r.set_error(e.to_string())),
        }
    });
}

#[component]
pub fn ReadingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let reading = RwSignal::new(ReadingState::default());
    let stats = RwSignal::new(StatsState::default());

    install_unauth_redirect(auth, false, use_navigate());

    let started = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if started.get_untracked() || state.loading || state.user.is_none() {
            return;
        }
        started.set(true);
        load_rows(reading);
        refresh_statistics(stats);
    });

    let toggle_row = move |observation_id: i64| {
        let mut claimed = false;
        let mut action = crate::net::types::ReadAction::Toggle;
        reading.update(|r| {
            claimed = r.begin(observation_id);
            action = r.button_action(observation_id);
        });
        if !claimed {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_read_state(observation_id, action).await {
                Ok(change) => {
                    reading.update(|r| {
                        r.finish(observation_id, Some(change.read));
                    });
                    if let Some(message) = change.message {
                        notify(toasts, ToastKind::Success, message);
                    }
                    refresh_statistics(stats);
                }
                Err(e) => {
                    log::warn!("read-state change for observation {observation_id} failed: {e}");
                    reading.update(|r| {
                        r.finish(observation_id, None);
                    });
                    notify(toasts, ToastKind::Error, e.to_string());
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (action, toasts);
    };

    let on_mark_all = move |_| {
        let ids = reading.get_untracked().unread_ids();
        if ids.is_empty() || reading.get_untracked().bulk_pending {
            return;
        }
        reading.update(|r| r.bulk_pending = true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let results = crate::net::api::mark_many_as_read(ids).await;
            reading.update(|r| r.bulk_pending = false);
            if results.iter().all(Result::is_ok) {
                notify(toasts, ToastKind::Success, "Todas las observaciones marcadas como leídas");
                load_rows(reading);
                refresh_statistics(stats);
            } else {
                let failed = results.iter().filter(|r| r.is_err()).count();
                log::warn!("bulk mark-as-read: {failed} request(s) failed");
                notify(toasts, ToastKind::Error, BULK_FAILURE);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = ids;
    };

    let filter_buttons = ReadFilter::ALL
        .into_iter()
        .map(|filter| {
            view! {
                <button
                    class="btn btn-sm btn-outline-secondary"
                    class:active=move || reading.get().filter == filter
                    data-filtro=filter.as_str()
                    on:click=move |_| reading.update(|r| r.filter = filter)
                >
                    {filter.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="lectura-page container">
            <header class="lectura-page__header">
                <h1>"Observaciones"</h1>
                <span class="text-muted">{move || auth.get().display_name().to_owned()}</span>
            </header>

            <ReadStatsPanel stats=stats />

            <div class="lectura-page__toolbar">
                <div class="btn-group" role="group">{filter_buttons}</div>
                <button
                    class="btn btn-primary"
                    disabled=move || reading.get().bulk_pending || reading.get().unread_ids().is_empty()
                    on:click=on_mark_all
                >
                    <i class="fas fa-check-double"></i>
                    {move || if reading.get().bulk_pending { " Procesando..." } else { " Marcar todas como leídas" }}
                </button>
            </div>

            <Show when=move || reading.get().error.is_some()>
                <div class="alert alert-danger">{move || reading.get().error.unwrap_or_default()}</div>
            </Show>
            <Show when=move || !reading.get().loading fallback=|| view! { <p>"Cargando observaciones..."</p> }>
                <table class="table tabla-observaciones">
                    <thead>
                        <tr>
                            <th>"Fecha"</th>
                            <th>"Estudiante"</th>
                            <th>"Tipo"</th>
                            <th>"Descripción"</th>
                            <th>"Estado"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || reading.get().visible_rows()
                            key=|row| row.id
                            children=move |row| {
                                let id = row.id;
                                let read = Signal::derive(move || reading.get().read_flag(id).unwrap_or(false));
                                let pending = Signal::derive(move || reading.get().is_pending(id));
                                view! {
                                    <tr class=move || visual_for(read.get()).row_class data-observacion-id=id>
                                        <td>{format_full_date(&row.fecha)}</td>
                                        <td>{row.estudiante}</td>
                                        <td>{row.tipo}</td>
                                        <td>{row.descripcion}</td>
                                        <td><ReadBadge read=read /></td>
                                        <td>
                                            <ReadToggleButton
                                                read=read
                                                pending=pending
                                                on_toggle=Callback::new(move |()| toggle_row(id))
                                            />
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
