//! Offer-units page (`/uof`).

use leptos::prelude::*;

use crate::components::unit_explorer::UnitExplorer;
use crate::net::api::UnitKind;

#[component]
pub fn OfferUnitsPage() -> impl IntoView {
    view! { <UnitExplorer kind=UnitKind::Uof title="Unidades de oferta"/> }
}
