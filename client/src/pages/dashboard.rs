//! Guardian dashboard: child selector, observation cards, multimedia modal
//! and report export.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the guardian landing route. The page owns the `PortalState`
//! signal and is the only place that turns a child selection into a fetch.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::child_selector::ChildSelector;
use crate::components::multimedia_modal::{MultimediaModal, load_multimedia};
use crate::components::observation_card::ObservationCard;
use crate::components::read_stats_panel::{ReadStatsPanel, refresh_statistics};
use crate::net::types::{MediaKind, Observation};
use crate::state::auth::AuthState;
use crate::state::child_selector::ChildSelected;
use crate::state::dashboard::{EMPTY_MESSAGE, LOADING_MESSAGE, Pane};
use crate::state::portal::PortalState;
use crate::state::report::build_report;
use crate::state::stats::StatsState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::auth::install_unauth_redirect;
use crate::util::download::{download_text, today_iso};
use crate::util::notify::notify;

/// Summary tiles above the cards: `(label, count)`.
fn summary_items((total, positivas, multimedia): (u32, u32, u32)) -> [(&'static str, u32); 3] {
    [("Observaciones", total), ("Positivas", positivas), ("Con multimedia", multimedia)]
}

fn load_child(portal: RwSignal<PortalState>, child_id: i64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_child_observations(child_id).await;
        let mut applied = false;
        portal.update(|p| applied = p.dashboard.finish_load(child_id, result));
        if !applied {
            log::debug!("dropped stale observations for child {child_id}");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (portal, child_id);
}

/// Guardian dashboard page. Redirects anonymous visitors to `/login` and
/// other roles to their own page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let portal = RwSignal::new(PortalState::default());
    let stats = RwSignal::new(StatsState::default());
    provide_context(portal);
    provide_context(stats);

    install_unauth_redirect(auth, true, use_navigate());

    let started = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if started.get_untracked() || state.loading || state.user.is_none() {
            return;
        }
        started.set(true);
        refresh_statistics(stats);
    });

    let on_select = Callback::new(move |event: ChildSelected| {
        let mut child_id = 0;
        portal.update(|p| child_id = p.on_child_selected(&event));
        load_child(portal, child_id);
    });
    let on_refresh = move |_| {
        let mut next = None;
        portal.update(|p| next = p.refresh());
        if let Some(child_id) = next {
            load_child(portal, child_id);
            refresh_statistics(stats);
        }
    };
    let on_open_media = Callback::new(move |(observation_id, kind): (i64, MediaKind)| {
        portal.update(|p| p.modal.open(observation_id, kind));
        load_multimedia(portal, observation_id);
    });
    let on_export = move |_| match build_report(&portal.get_untracked(), &today_iso()) {
        Ok(report) => match download_text(&report.filename, &report.body) {
            Ok(()) => notify(toasts, ToastKind::Success, "Reporte descargado"),
            Err(e) => notify(toasts, ToastKind::Error, e),
        },
        Err(e) => notify(toasts, ToastKind::Warning, e.to_string()),
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.user = None);
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/login");
            }
        });
    };

    let pane = Memo::new(move |_| portal.with(|p| p.dashboard.pane()));
    let content = move || match pane.get() {
        Pane::Idle => view! {
            <div class="dashboard-empty">
                <i class="fas fa-hand-pointer fa-2x"></i>
                <p>"Selecciona un estudiante para ver sus observaciones"</p>
            </div>
        }
        .into_any(),
        Pane::Loading => view! {
            <div class="dashboard-loading">
                <i class="fas fa-spinner fa-spin fa-2x"></i>
                <p>{LOADING_MESSAGE}</p>
            </div>
        }
        .into_any(),
        Pane::Errored(message) => view! {
            <div class="alert alert-danger">
                <p>{message}</p>
                <button class="btn btn-sm btn-outline-danger" on:click=on_refresh>"Reintentar"</button>
            </div>
        }
        .into_any(),
        Pane::Empty => view! {
            <div class="dashboard-empty">
                <i class="fas fa-clipboard fa-2x"></i>
                <p>{EMPTY_MESSAGE}</p>
            </div>
        }
        .into_any(),
        Pane::Cards => {
            let tiles = move || {
                summary_items(portal.with(|p| p.dashboard.summary()))
                    .into_iter()
                    .map(|(label, count)| {
                        view! {
                            <div class="resumen__item">
                                <span class="resumen__valor">{count}</span>
                                <span class="resumen__etiqueta">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()
            };
            view! {
                <div class="resumen">{tiles}</div>
                <div class="observaciones">
                    <For
                        each=move || portal.with(|p| p.observations().to_vec())
                        key=|observation: &Observation| observation.id
                        children=move |observation| {
                            view! { <ObservationCard observation=observation on_open_media=on_open_media /> }
                        }
                    />
                </div>
            }
            .into_any()
        }
    };

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().user.is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Cargando..." } else { "Redirigiendo..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page container">
                <header class="dashboard-page__header">
                    <h1>"Panel del Acudiente"</h1>
                    <span class="dashboard-page__user">{move || auth.get().display_name().to_owned()}</span>
                    <button class="btn btn-link" on:click=on_logout>"Cerrar sesión"</button>
                </header>
                <div class="dashboard-page__toolbar">
                    <ChildSelector on_select=on_select />
                    <button
                        class="btn btn-outline-secondary"
                        disabled=move || portal.get().selected_child().is_none()
                        on:click=on_refresh
                    >
                        <i class="fas fa-sync-alt"></i>
                        " Actualizar"
                    </button>
                    <button class="btn btn-outline-success" on:click=on_export>
                        <i class="fas fa-file-download"></i>
                        " Exportar"
                    </button>
                </div>
                <ReadStatsPanel stats=stats />
                <main class="dashboard-page__content">{content}</main>
            </div>
            <MultimediaModal />
        </Show>
    }
}
