//! Public landing page.

use leptos::prelude::*;

use crate::components::info_card::InfoCard;
use crate::state::auth::AuthState;

const FEATURES: [(&str, &str, &str); 4] = [
    (
        "Observaciones al instante",
        "fa-bell",
        "Los profesores registran observaciones positivas, de mejora o neutrales y el acudiente las consulta desde cualquier dispositivo.",
    ),
    (
        "Fotos y videos",
        "fa-images",
        "Cada observación puede incluir fotos o videos de la actividad para que la familia vea lo que pasó en clase.",
    ),
    (
        "Seguimiento de lectura",
        "fa-eye",
        "El colegio sabe qué observaciones ya fueron leídas y cuáles siguen pendientes.",
    ),
    (
        "Reportes descargables",
        "fa-file-download",
        "El acudiente puede descargar el historial de observaciones de cada hijo en un archivo de texto.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let entry = move || {
        auth.get()
            .user
            .map_or(("/login", "Ingresar"), |user| (user.home_route(), "Ir a mi panel"))
    };

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Teaching Notes"</h1>
                <p class="hero__lead">"Comunicación entre el colegio y la familia, una observación a la vez."</p>
                <div class="hero__actions">
                    <a class="btn btn-primary" href=move || entry().0>{move || entry().1}</a>
                    <a class="btn btn-outline-primary" href="/registro">"Registrar mi colegio"</a>
                </div>
            </section>
            <section class="info-cards">
                {FEATURES
                    .into_iter()
                    .map(|(title, icon, body)| view! { <InfoCard title=title icon=icon body=body /> })
                    .collect_view()}
            </section>
        </div>
    }
}
