//! School registration request page.

use leptos::prelude::*;

use crate::components::registration_form::RegistrationForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <div class="registro-page container">
            <h1>"Registra tu colegio"</h1>
            <p class="text-muted">
                "Déjanos tus datos y un asesor se comunicará contigo para activar Teaching Notes en tu institución."
            </p>
            <RegistrationForm />
            <a href="/">"Volver al inicio"</a>
        </div>
    }
}
