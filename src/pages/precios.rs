//! Market-prices page (`/precios`).

#[cfg(test)]
#[path = "precios_test.rs"]
mod precios_test;

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::net::http::Api;
use crate::pages::query::{
    AGRUPACIONES, MERCADOS, SENTIDOS, parse_sesion, sesion_required, validate_market_query,
};
use crate::state::session::SessionState;

/// Parse the session input and enforce it where the market demands one.
fn validate_sesion(mercado: &str, input: &str) -> Result<Option<u8>, &'static str> {
    let sesion = parse_sesion(input)?;
    if sesion_required(mercado) && sesion.is_none() {
        return Err("The intraday market needs a session number.");
    }
    Ok(sesion)
}

#[component]
pub fn PricesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();

    let fecha_inicial = RwSignal::new(String::new());
    let fecha_final = RwSignal::new(String::new());
    let mercado = RwSignal::new("diario".to_owned());
    let sentido = RwSignal::new("subir".to_owned());
    let agrupar = RwSignal::new("hora".to_owned());
    let sesion = RwSignal::new(String::new());
    let rows = RwSignal::new(Vec::<serde_json::Value>::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let query = match validate_market_query(&fecha_inicial.get(), &fecha_final.get(), &mercado.get())
        {
            Ok(query) => query,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let sesion_value = match validate_sesion(&query.mercado, &sesion.get()) {
            Ok(sesion) => sesion,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().token;
                let sentido_value = sentido.get_untracked();
                let agrupar_value = agrupar.get_untracked();
                match crate::net::api::fetch_precios(
                    &api,
                    token.as_deref(),
                    &query,
                    &sentido_value,
                    sesion_value,
                    &agrupar_value,
                )
                .await
                {
                    Ok(data) => rows.set(data),
                    Err(e) => error.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &session, &query, sesion_value);
            busy.set(false);
        }
    };

    view! {
        <section class="explorer">
            <h1>"Precios de mercado"</h1>
            <form class="explorer-form" on:submit=on_submit>
                <input
                    class="explorer-input"
                    type="date"
                    prop:value=move || fecha_inicial.get()
                    on:input=move |ev| fecha_inicial.set(event_target_value(&ev))
                />
                <input
                    class="explorer-input"
                    type="date"
                    prop:value=move || fecha_final.get()
                    on:input=move |ev| fecha_final.set(event_target_value(&ev))
                />
                <select
                    class="explorer-input"
                    prop:value=move || mercado.get()
                    on:change=move |ev| mercado.set(event_target_value(&ev))
                >
                    {MERCADOS
                        .iter()
                        .map(|market| view! { <option value=*market>{*market}</option> })
                        .collect_view()}
                </select>
                <select
                    class="explorer-input"
                    prop:value=move || sentido.get()
                    on:change=move |ev| sentido.set(event_target_value(&ev))
                >
                    {SENTIDOS
                        .iter()
                        .map(|direction| view! { <option value=*direction>{*direction}</option> })
                        .collect_view()}
                </select>
                <select
                    class="explorer-input"
                    prop:value=move || agrupar.get()
                    on:change=move |ev| agrupar.set(event_target_value(&ev))
                >
                    {AGRUPACIONES
                        .iter()
                        .map(|grouping| view! { <option value=*grouping>{*grouping}</option> })
                        .collect_view()}
                </select>
                <Show when=move || sesion_required(&mercado.get())>
                    <input
                        class="explorer-input explorer-input--sesion"
                        type="text"
                        placeholder="Sesión (1-7)"
                        prop:value=move || sesion.get()
                        on:input=move |ev| sesion.set(event_target_value(&ev))
                    />
                </Show>
                <button class="explorer-button" type="submit" disabled=move || busy.get()>
                    "Consultar"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="explorer-error">{move || error.get()}</p>
            </Show>
            <DataTable rows=rows/>
        </section>
    }
}
