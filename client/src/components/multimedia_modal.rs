//! Photo/video gallery modal for one observation.

use leptos::prelude::*;

use crate::state::media_modal::{ERROR_TITLE, LOADING_MESSAGE, ModalPhase, NO_FILES_MESSAGE, NO_FILES_TITLE};
use crate::state::portal::PortalState;

/// Fetch the assets of the observation the modal is loading.
pub fn load_multimedia(portal: RwSignal<PortalState>, observation_id: i64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_multimedia(observation_id).await;
        portal.update(|p| p.modal.apply(observation_id, result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (portal, observation_id);
}

#[component]
pub fn MultimediaModal() -> impl IntoView {
    let portal = expect_context::<RwSignal<PortalState>>();

    let close = move || portal.update(|p| p.modal.close());
    let on_retry = move |_| {
        let mut next = None;
        portal.update(|p| next = p.modal.retry());
        if let Some(id) = next {
            load_multimedia(portal, id);
        }
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            if portal.get_untracked().modal.fullscreen.is_some() {
                portal.update(|p| p.modal.close_fullscreen());
            } else {
                close();
            }
        }
    };

    let body = move || {
        let modal = portal.get().modal;
        match modal.phase {
            ModalPhase::Closed => ().into_any(),
            ModalPhase::Loading => view! {
                <div class="modal-state">
                    <i class="fas fa-spinner fa-spin fa-2x"></i>
                    <p>{LOADING_MESSAGE}</p>
                </div>
            }
            .into_any(),
            ModalPhase::Error(message) => view! {
                <div class="modal-state text-danger">
                    <i class="fas fa-exclamation-triangle fa-2x"></i>
                    <h5>{ERROR_TITLE}</h5>
                    <p>{message}</p>
                    <button class="btn btn-primary" on:click=on_retry>"Reintentar"</button>
                </div>
            }
            .into_any(),
            ModalPhase::NoFiles => view! {
                <div class="modal-state">
                    <i class="fas fa-folder-open fa-2x"></i>
                    <h5>{NO_FILES_TITLE}</h5>
                    <p>{NO_FILES_MESSAGE}</p>
                </div>
            }
            .into_any(),
            ModalPhase::EmptyKind => view! {
                <div class="modal-state">
                    <h5>{modal.kind.empty_message()}</h5>
                    <p>{modal.empty_kind_message()}</p>
                </div>
            }
            .into_any(),
            ModalPhase::Gallery(assets) => view! {
                <div class="galeria">
                    {assets
                        .into_iter()
                        .map(|asset| {
                            let media = if asset.is_image {
                                let clicked = asset.clone();
                                view! {
                                    <img
                                        src=asset.url.clone()
                                        alt=asset.filename.clone()
                                        loading="lazy"
                                        on:click=move |_| portal.update(|p| p.modal.open_fullscreen(&clicked))
                                    />
                                }
                                    .into_any()
                            } else {
                                view! { <video src=asset.url.clone() controls=true preload="metadata"></video> }
                                    .into_any()
                            };
                            view! {
                                <figure class="galeria__item">
                                    {media}
                                    <figcaption>
                                        <span class="galeria__nombre">{asset.filename}</span>
                                        <small class="text-muted">" " {asset.formatted_size}</small>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any(),
        }
    };

    view! {
        <Show when=move || portal.get().modal.is_open()>
            <div class="modal-backdrop" on:click=move |_| close()>
                <div
                    class="modal-dialog modal-lg"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <div class="modal-content">
                        <div class="modal-header">
                            <h5 class="modal-title">{move || portal.get().modal.title()}</h5>
                            <button class="btn-close" aria-label="Cerrar" on:click=move |_| close()>"×"</button>
                        </div>
                        <div class="modal-body">{body}</div>
                    </div>
                </div>
            </div>
        </Show>
        {move || {
            portal
                .get()
                .modal
                .fullscreen
                .map(|image| {
                    let caption = image.filename.clone();
                    view! {
                        <div class="imagen-fullscreen" on:click=move |_| portal.update(|p| p.modal.close_fullscreen())>
                            <img src=image.url alt=image.filename />
                            <p class="imagen-fullscreen__nombre">{caption}</p>
                        </div>
                    }
                })
        }}
    }
}
