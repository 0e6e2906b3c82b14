//! Reading statistics panel: four counters and a progress bar.

use leptos::prelude::*;

use crate::state::stats::StatsState;

#[component]
pub fn ReadStatsPanel(#[prop(into)] stats: Signal<StatsState>) -> impl IntoView {
    let slots = move || stats.get().slots();

    view! {
        <section class="estadisticas-lectura">
            <div class="stat">
                <span class="stat__value" id="total-observaciones">{move || slots().total}</span>
                <span class="stat__label">"Total"</span>
            </div>
            <div class="stat">
                <span class="stat__value" id="observaciones-leidas">{move || slots().read}</span>
                <span class="stat__label">"Leídas"</span>
            </div>
            <div class="stat">
                <span class="stat__value" id="observaciones-no-leidas">{move || slots().unread}</span>
                <span class="stat__label">"No leídas"</span>
            </div>
            <div class="stat">
                <span class="stat__value" id="porcentaje-leidas">{move || slots().percentage}</span>
                <span class="stat__label">"Leído"</span>
            </div>
            <div class="progress">
                <div
                    class="progress-bar"
                    role="progressbar"
                    style=move || slots().bar_style
                    aria-valuenow=move || slots().aria_valuenow
                    aria-valuemin="0"
                    aria-valuemax="100"
                ></div>
            </div>
        </section>
    }
}

/// Re-read the counters. Failures are logged and keep the previous values.
pub fn refresh_statistics(stats: RwSignal<StatsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_statistics().await {
            Ok(next) => {
                let mut accepted = true;
                stats.update(|s| accepted = s.apply(next));
                if !accepted {
                    log::warn!("ignoring inconsistent reading statistics: {next:?}");
                }
            }
            Err(e) => log::warn!("statistics refresh failed: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = stats;
}
