//! School registration request form.

use leptos::prelude::*;
use wire::registration::RegistrationField;

use crate::state::registration::RegistrationState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::{state::toast::ToastKind, util::notify::notify};

fn field_label(field: RegistrationField) -> &'static str {
    match field {
        RegistrationField::Nombre => "Nombre completo",
        RegistrationField::Correo => "Correo electrónico",
        RegistrationField::Celular => "Celular",
        RegistrationField::Colegio => "Nombre del colegio",
        RegistrationField::Estudiantes => "Cantidad de estudiantes",
    }
}

fn field_input_type(field: RegistrationField) -> &'static str {
    match field {
        RegistrationField::Correo => "email",
        RegistrationField::Celular => "tel",
        RegistrationField::Estudiantes => "number",
        RegistrationField::Nombre | RegistrationField::Colegio => "text",
    }
}

#[component]
pub fn RegistrationForm() -> impl IntoView {
    let state = RwSignal::new(RegistrationState::default());
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut request = None;
        state.update(|s| request = s.begin_submit());
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_registration(&request).await;
            if let Err(e) = &result {
                log::error!("registration submit failed: {e}");
            }
            let mut message = "";
            state.update(|s| message = s.finish_submit(&result));
            let kind = if result.is_ok() { ToastKind::Success } else { ToastKind::Error };
            notify(toasts, kind, message);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, toasts);
    };

    let fields = RegistrationField::ALL
        .into_iter()
        .map(|field| {
            let id = format!("registro-{}", field_label(field).to_lowercase().replace(' ', "-"));
            let error = move || state.get().error(field).map(str::to_owned);
            view! {
                <div class="form-group">
                    <label for=id.clone()>{field_label(field)}</label>
                    <input
                        id=id
                        class="form-control"
                        class:is-invalid=move || error().is_some()
                        type=field_input_type(field)
                        prop:value=move || state.get().form.value(field).to_owned()
                        on:input=move |ev| state.update(|s| s.input(field, event_target_value(&ev)))
                        on:blur=move |_| state.update(|s| s.blur(field))
                    />
                    <div class="invalid-feedback">{move || error().unwrap_or_default()}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="registro-form" novalidate=true on:submit=on_submit>
            {fields}
            <button class="btn btn-primary" type="submit" disabled=move || state.get().submitting>
                {move || state.get().button_label()}
            </button>
        </form>
    }
}
