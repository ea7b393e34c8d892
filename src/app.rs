//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::http::Api;
use crate::pages::home::{HomeOverview, HomePage};
use crate::pages::login::LoginPage;
use crate::pages::precios::PricesPage;
use crate::pages::uof::OfferUnitsPage;
use crate::pages::up::ProgrammingUnitsPage;
use crate::routes::install_route_guard;
use crate::state::session::SessionState;

/// Root application component.
///
/// Owns the session signal and the shared API client, provides both via
/// context, and sets up client-side routing to mirror `routes::ROUTE_TABLE`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Explicitly constructed here and injected by context; nothing else may
    // hold the session.
    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(Api::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/mercado-client.css"/>
        <Title text="Mercado"/>

        <Router>
            <NavigationGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=HomePage>
                    <Route path=StaticSegment("") view=HomeOverview/>
                    <Route path=StaticSegment("up") view=ProgrammingUnitsPage/>
                    <Route path=StaticSegment("uof") view=OfferUnitsPage/>
                    <Route path=StaticSegment("precios") view=PricesPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Mounts the route guard inside the router context so it re-evaluates on
/// every location change and every session write.
#[component]
fn NavigationGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();
    install_route_guard(session, move || location.pathname.get(), navigate);
}
