//! Login page: username + password against the market API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::Api;
use crate::state::session::SessionState;

/// Trim the username and require both fields. Passwords are taken verbatim;
/// leading or trailing spaces may be intentional.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(pair) => pair,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&api, &user, &pass).await {
                    Ok(identity) => {
                        // One atomic session update: flag, token and identity
                        // are never observable half-set.
                        session.update(|state| {
                            state.begin(identity.token, identity.user_id, identity.user_name);
                        });
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &navigate, &session, &user, &pass);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Mercado"</h1>
                <p class="login-card__subtitle">"Resultados de mercado"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Usuario"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Iniciar sesión"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
