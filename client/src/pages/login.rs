//! Login page: account identifier (email, cédula or PPT) plus a
//! six-character access code mailed to the account.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::{CodeRequest, CodeVerify, LoginIdentifier, LoginMethod};

const CODE_LEN: usize = 6;
const MISSING_CODE: &str = "Ingresa el código de 6 caracteres.";
const CODE_SENT: &str = "Si los datos corresponden a una cuenta activa, recibirás un código en tu correo.";

fn normalize_code_input(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

fn validate_request_input(method: LoginMethod, usuario: &str) -> Result<CodeRequest, String> {
    let identifier = LoginIdentifier::parse(method, usuario).map_err(|e| e.to_string())?;
    Ok(CodeRequest { login_method: method, usuario: identifier.value })
}

fn validate_verify_input(method: LoginMethod, usuario: &str, code: &str) -> Result<CodeVerify, String> {
    let request = validate_request_input(method, usuario)?;
    let code = code.trim();
    if code.chars().count() != CODE_LEN {
        return Err(MISSING_CODE.to_owned());
    }
    Ok(CodeVerify { login_method: method, usuario: request.usuario, code: code.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let method = RwSignal::new(LoginMethod::default());
    let usuario = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let echoed_code = RwSignal::new(None::<String>);

    let on_request_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_request_input(method.get(), &usuario.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set("Solicitando código...".to_owned());
        echoed_code.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_login_code(&request).await {
                Ok(code_opt) => {
                    echoed_code.set(code_opt);
                    info.set(CODE_SENT.to_owned());
                }
                Err(e) => info.set(format!("No se pudo solicitar el código: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_verify_code = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_verify_input(method.get(), &usuario.get(), &code.get()) {
            Ok(request) => request,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set("Verificando código...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_login_code(&request).await {
                Ok(target) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(&target);
                    }
                }
                Err(e) => {
                    info.set(format!("Verificación fallida: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let on_method_change = move |ev: leptos::ev::Event| {
        method.set(LoginMethod::parse(&event_target_value(&ev)).unwrap_or_default());
        echoed_code.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Teaching Notes"</h1>
                <p class="login-card__subtitle">"Acceso con código enviado a tu correo"</p>
                <form class="login-form" on:submit=on_request_code>
                    <select class="login-input login-input--method" on:change=on_method_change>
                        {LoginMethod::ALL
                            .into_iter()
                            .map(|m| {
                                view! {
                                    <option value=m.as_str() selected=move || method.get() == m>
                                        {m.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        class="login-input"
                        type="text"
                        placeholder=move || method.get().placeholder()
                        prop:value=move || usuario.get()
                        on:input=move |ev| usuario.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Enviar código"
                    </button>
                </form>
                <form class="login-form" on:submit=on_verify_code>
                    <input
                        class="login-input login-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="ABC123"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(normalize_code_input(&event_target_value(&ev)))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Ingresar"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <Show when=move || echoed_code.get().is_some()>
                    <p class="login-message login-message--code">
                        "Código: "
                        <span>{move || echoed_code.get().unwrap_or_default()}</span>
                    </p>
                </Show>
                <div class="login-divider"></div>
                <a class="login-link" href="/registro">"¿Tu colegio aún no usa Teaching Notes? Regístralo"</a>
            </div>
        </div>
    }
}
