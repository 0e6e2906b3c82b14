//! Expandable informational card used on the landing page.

use leptos::prelude::*;

use crate::state::cards::{CardToggle, CardToggleConfig, is_toggle_key};

#[component]
pub fn InfoCard(
    #[prop(into)] title: String,
    #[prop(into)] icon: String,
    #[prop(into)] body: String,
    #[prop(optional)] config: Option<CardToggleConfig>,
) -> impl IntoView {
    let card = RwSignal::new(CardToggle::new(config.unwrap_or_default()));
    let content = body.clone();
    let toggle = move || card.update(|c| {
        c.toggle(&content);
    });
    let toggle_key = toggle.clone();

    view! {
        <div class="info-card" class:expanded=move || card.get().expanded>
            <div
                class="info-card__header"
                role="button"
                tabindex="0"
                aria-expanded=move || card.get().aria_expanded()
                on:click=move |_| toggle()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if is_toggle_key(&ev.key()) {
                        ev.prevent_default();
                        toggle_key();
                    }
                }
            >
                <i class=format!("fas {icon}")></i>
                <h3>{title}</h3>
                <i class=move || format!("fas fa-chevron-down {}", card.get().icon_class())></i>
            </div>
            <div
                class="info-card__body"
                style=move || {
                    let c = card.get();
                    format!("{}; display: {}", c.config.transition_style(c.expanded), if c.expanded { "block" } else { "none" })
                }
            >
                <p>{body}</p>
            </div>
        </div>
    }
}
