//! Home layout for the protected area: navigation chrome plus an outlet for
//! the data pages, and the landing view shown at `/`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

use crate::state::session::SessionState;

fn greeting(user_name: Option<&str>) -> String {
    match user_name {
        Some(name) => format!("Hola, {name}"),
        None => "Hola".to_owned(),
    }
}

/// Whether the protected shell may render. The route guard redirects
/// unauthenticated visitors, but it runs after the first paint; holding the
/// chrome back until the session is confirmed keeps it from flashing.
fn shell_visible(state: &SessionState) -> bool {
    state.is_authenticated()
}

/// Shell for every protected route. Logging out clears the session; the
/// route guard then redirects to `/login` on its own.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show when=move || shell_visible(&session.get())>
        <div class="app-shell">
            <header class="app-nav">
                <span class="app-nav__title">"Mercado"</span>
                <nav class="app-nav__links">
                    <A href="/up">"UP"</A>
                    <A href="/uof">"UOF"</A>
                    <A href="/precios">"Precios"</A>
                </nav>
                <span class="app-nav__user">
                    {move || session.get().user_name.unwrap_or_default()}
                </span>
                <button
                    class="app-nav__logout"
                    on:click=move |_| session.update(SessionState::end)
                >
                    "Cerrar sesión"
                </button>
            </header>
            <main class="app-main">
                <Outlet/>
            </main>
        </div>
        </Show>
    }
}

/// Landing view at `/`.
#[component]
pub fn HomeOverview() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="home-overview">
            <h1>{move || greeting(session.get().user_name.as_deref())}</h1>
            <p>
                "Consulta programas, ganancias y precios de los mercados de "
                "electricidad desde las pestañas de arriba."
            </p>
        </section>
    }
}
