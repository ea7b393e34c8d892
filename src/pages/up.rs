//! Programming-units page (`/up`).

use leptos::prelude::*;

use crate::components::unit_explorer::UnitExplorer;
use crate::net::api::UnitKind;

#[component]
pub fn ProgrammingUnitsPage() -> impl IntoView {
    view! { <UnitExplorer kind=UnitKind::Up title="Unidades de programación"/> }
}
