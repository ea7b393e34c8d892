//! Query form and results for a unit family (UP or UOF).
//!
//! SYSTEM CONTEXT
//! ==============
//! The UP and UOF pages are the same screen pointed at different backend
//! blueprints, so both delegate here and only choose the `UnitKind`.

#[cfg(test)]
#[path = "unit_explorer_test.rs"]
mod unit_explorer_test;

use leptos::prelude::*;

use crate::components::data_table::DataTable;
use crate::net::api::{MarketQuery, UnitKind};
use crate::net::http::Api;
use crate::pages::query::{
    AGRUPACIONES, MERCADOS, SENTIDOS, parse_units_input, validate_market_query,
};
use crate::state::session::SessionState;

/// Which result family the explorer is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataView {
    Programas,
    Ganancias,
}

/// Programs accept a unit list; earnings are computed per single unit.
fn validate_units_for(view: DataView, units: &[String]) -> Result<(), &'static str> {
    match view {
        DataView::Programas if units.is_empty() => Err("Enter at least one unit."),
        DataView::Ganancias if units.len() != 1 => Err("Earnings queries take exactly one unit."),
        _ => Ok(()),
    }
}

/// The name list endpoint only exists for programming units.
fn unit_list_available(kind: UnitKind) -> bool {
    kind == UnitKind::Up
}

#[component]
pub fn UnitExplorer(kind: UnitKind, title: &'static str) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let api = expect_context::<Api>();

    let fecha_inicial = RwSignal::new(String::new());
    let fecha_final = RwSignal::new(String::new());
    let mercado = RwSignal::new("diario".to_owned());
    let sentido = RwSignal::new("subir".to_owned());
    let agrupar = RwSignal::new("hora".to_owned());
    let units = RwSignal::new(String::new());
    let view_kind = RwSignal::new(DataView::Programas);
    let available = RwSignal::new(Vec::<String>::new());
    let rows = RwSignal::new(Vec::<serde_json::Value>::new());
    let totales = RwSignal::new(Vec::<serde_json::Value>::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let datalist_id = match kind {
        UnitKind::Up => "up-units",
        UnitKind::Uof => "uof-units",
    };

    let validated_query = move || -> Result<MarketQuery, &'static str> {
        validate_market_query(&fecha_inicial.get(), &fecha_final.get(), &mercado.get())
    };

    let api_for_list = api.clone();
    let on_load_units = move |_| {
        if busy.get() {
            return;
        }
        let query = match validated_query() {
            Ok(query) => query,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let api = api_for_list.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().token;
                match crate::net::api::fetch_unit_list(&api, token.as_deref(), &query).await {
                    Ok(list) => available.set(list),
                    Err(e) => error.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api_for_list, &session, &query);
            busy.set(false);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let query = match validated_query() {
            Ok(query) => query,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let unit_list = parse_units_input(&units.get());
        let selected_view = view_kind.get();
        if let Err(message) = validate_units_for(selected_view, &unit_list) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let token = session.get_untracked().token;
                let sentido_value = sentido.get_untracked();
                let agrupar_value = agrupar.get_untracked();
                match selected_view {
                    DataView::Programas => {
                        let result = crate::net::api::fetch_programas(
                            &api,
                            token.as_deref(),
                            kind,
                            &query,
                            &unit_list,
                            &sentido_value,
                            &agrupar_value,
                        )
                        .await;
                        match result {
                            Ok(data) => {
                                rows.set(data);
                                totales.set(Vec::new());
                            }
                            Err(e) => error.set(e),
                        }
                    }
                    DataView::Ganancias => {
                        let result = crate::net::api::fetch_ganancias(
                            &api,
                            token.as_deref(),
                            kind,
                            &query,
                            &unit_list[0],
                            &sentido_value,
                            &agrupar_value,
                        )
                        .await;
                        match result {
                            Ok(data) => {
                                rows.set(data.rows);
                                totales.set(data.totales);
                            }
                            Err(e) => error.set(e),
                        }
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &session, &query, &unit_list, selected_view, kind);
            busy.set(false);
        }
    };

    view! {
        <section class="explorer">
            <h1>{title}</h1>
            <div class="explorer-tabs">
                <button
                    type="button"
                    class:active=move || view_kind.get() == DataView::Programas
                    on:click=move |_| view_kind.set(DataView::Programas)
                >
                    "Programas"
                </button>
                <button
                    type="button"
                    class:active=move || view_kind.get() == DataView::Ganancias
                    on:click=move |_| view_kind.set(DataView::Ganancias)
                >
                    "Ganancias"
                </button>
            </div>
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
                <input
                    class="explorer-input explorer-input--units"
                    type="text"
                    placeholder="Unidades (ACE3, ABO1)"
                    list=datalist_id
                    prop:value=move || units.get()
                    on:input=move |ev| units.set(event_target_value(&ev))
                />
                <datalist id=datalist_id>
                    {move || {
                        available
                            .get()
                            .into_iter()
                            .map(|unit| view! { <option value=unit></option> })
                            .collect_view()
                    }}
                </datalist>
                <Show when=move || unit_list_available(kind)>
                    <button
                        class="explorer-button"
                        type="button"
                        disabled=move || busy.get()
                        on:click=on_load_units.clone()
                    >
                        "Cargar unidades"
                    </button>
                </Show>
                <button class="explorer-button" type="submit" disabled=move || busy.get()>
                    "Consultar"
                </button>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="explorer-error">{move || error.get()}</p>
            </Show>
            <DataTable rows=rows/>
            <Show when=move || !totales.get().is_empty()>
                <h2>"Ganancias totales"</h2>
                <DataTable rows=totales/>
            </Show>
        </section>
    }
}
