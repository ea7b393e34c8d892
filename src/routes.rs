//! Typed route table and the pre-navigation auth guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components must apply identical unauthenticated redirect behavior,
//! so the allow/redirect decision lives here as a pure function over the
//! static table and the session state. `App` installs it once as a reactive
//! effect; pages never re-implement it.
//!
//! DESIGN
//! ======
//! Protection is declared per record with a plain boolean and inherited
//! structurally: a path is protected when ANY record in its matched chain
//! (the record itself or any ancestor) carries `requires_auth`. The walk over
//! the chain is explicit so the OR-across-ancestors rule is visible in code
//! and in tests rather than buried in router metadata.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Public route every unauthenticated visitor is sent to.
pub const LOGIN_PATH: &str = "/login";

/// One declarative route record. Child paths are absolute, as in the route
/// table the backend documents; nesting only expresses guard inheritance and
/// layout, not path concatenation.
#[derive(Debug)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
    pub children: &'static [RouteRecord],
}

/// The application's static route table: `/login` is public, everything
/// under the home layout requires an authenticated session.
pub const ROUTE_TABLE: &[RouteRecord] = &[
    RouteRecord {
        path: LOGIN_PATH,
        name: "login",
        requires_auth: false,
        children: &[],
    },
    RouteRecord {
        path: "/",
        name: "home",
        requires_auth: true,
        children: &[
            RouteRecord {
                path: "/up",
                name: "programming-units",
                requires_auth: true,
                children: &[],
            },
            RouteRecord {
                path: "/uof",
                name: "offer-units",
                requires_auth: true,
                children: &[],
            },
            RouteRecord {
                path: "/precios",
                name: "prices",
                requires_auth: true,
                children: &[],
            },
        ],
    },
];

/// Outcome of a guard evaluation. Guards are total: never an error, only
/// allow or redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

/// Strip a trailing slash so `/up/` and `/up` match the same record.
fn normalize_path(path: &str) -> &str {
    if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    }
}

fn find_chain<'table>(
    records: &'table [RouteRecord],
    path: &str,
    chain: &mut Vec<&'table RouteRecord>,
) -> bool {
    for record in records {
        chain.push(record);
        if record.path == path || find_chain(record.children, path, chain) {
            return true;
        }
        chain.pop();
    }
    false
}

/// The matched route record plus all of its ancestors, outermost first.
/// Unknown paths yield an empty chain.
pub fn matched_chain(path: &str) -> Vec<&'static RouteRecord> {
    let path = normalize_path(path);
    let mut chain = Vec::new();
    find_chain(ROUTE_TABLE, path, &mut chain);
    chain
}

/// OR across the whole matched chain: a single flagged ancestor is enough to
/// protect every route nested beneath it.
pub fn chain_requires_auth(chain: &[&RouteRecord]) -> bool {
    chain.iter().any(|record| record.requires_auth)
}

/// Decide a pending transition to `path` against the current session.
/// Redirects to the login route when the chain is protected and the session
/// is not explicitly authenticated; every other transition is allowed.
pub fn guard(path: &str, session: &SessionState) -> GuardDecision {
    let chain = matched_chain(path);
    if chain_requires_auth(&chain) && !session.is_authenticated() {
        GuardDecision::Redirect(LOGIN_PATH)
    } else {
        GuardDecision::Allow
    }
}

/// Install the guard as an effect over the current location and session.
///
/// Re-runs on every navigation and on every session write, so a logout on a
/// protected page redirects immediately without waiting for the next
/// transition.
pub fn install_route_guard<P, N>(session: RwSignal<SessionState>, current_path: P, navigate: N)
where
    P: Fn() -> String + 'static,
    N: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if let GuardDecision::Redirect(target) = guard(&current_path(), &state) {
            navigate(target, NavigateOptions::default());
        }
    });
}
