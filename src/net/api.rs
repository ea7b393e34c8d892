//! Endpoint wrappers for the market API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Thin, schema-driven calls over the shared `Api` client: login, the UP
//! name list, and the three query families (programas, ganancias, precios)
//! the data pages render. The query families are POSTs with the market in
//! the path and an `entradaAPI` JSON body, exactly as the backend
//! blueprints define them; only the UP list is a GET with query parameters.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;

use super::http::Api;
use super::types::{LoginResponse, data_field, data_rows};

/// Which unit family a programas/ganancias query targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitKind {
    /// Programming units (`/up/...`).
    Up,
    /// Offer units (`/uof/...`).
    Uof,
}

impl UnitKind {
    fn prefix(self) -> &'static str {
        match self {
            UnitKind::Up => "/up",
            UnitKind::Uof => "/uof",
        }
    }
}

/// Date range and market shared by every data query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketQuery {
    /// Start date, `YYYY-MM-DD`.
    pub fecha_inicial: String,
    /// End date, `YYYY-MM-DD`.
    pub fecha_final: String,
    /// Market identifier (`diario`, `intradiario`, `secundaria`, ...).
    pub mercado: String,
}

/// Earnings payload: per-row detail plus the per-unit totals the backend
/// returns alongside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Ganancias {
    pub rows: Vec<serde_json::Value>,
    pub totales: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// Body of every consulta POST. The backend reads all parameters from this
/// envelope; the market also rides in the URL path.
#[derive(Debug, Serialize)]
struct EntradaApi<'a> {
    fecha_inicial: &'a str,
    fecha_final: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    up: Option<String>,
    mercado: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentido: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sesion: Option<u8>,
    agrupar: &'a str,
}

#[derive(Debug, Serialize)]
struct ConsultaRequest<'a> {
    #[serde(rename = "entradaAPI")]
    entrada_api: EntradaApi<'a>,
}

fn consulta_body<'a>(
    query: &'a MarketQuery,
    units: Option<&[String]>,
    sentido: Option<&'a str>,
    sesion: Option<u8>,
    agrupar: &'a str,
) -> ConsultaRequest<'a> {
    ConsultaRequest {
        entrada_api: EntradaApi {
            fecha_inicial: &query.fecha_inicial,
            fecha_final: &query.fecha_final,
            // Multiple units travel comma-joined in one field.
            up: units.map(|units| units.join(",")),
            mercado: &query.mercado,
            sentido,
            sesion,
            agrupar,
        },
    }
}

fn unit_list_endpoint(query: &MarketQuery) -> String {
    format!(
        "/up/get-list?fecha_inicial={}&fecha_final={}&mercado={}",
        query.fecha_inicial, query.fecha_final, query.mercado,
    )
}

fn programas_endpoint(kind: UnitKind, mercado: &str) -> String {
    format!("{}/programas/{mercado}", kind.prefix())
}

fn ganancias_endpoint(kind: UnitKind, mercado: &str) -> String {
    format!("{}/ganancias/{mercado}", kind.prefix())
}

fn precios_endpoint(mercado: &str) -> String {
    format!("/precios/{mercado}")
}

/// Authenticate against `POST /login`.
///
/// # Errors
///
/// HTTP failures from the client, JSend `fail`/`error` messages, and a
/// malformed identity payload all surface as message strings.
pub async fn login(api: &Api, username: &str, password: &str) -> Result<LoginResponse, String> {
    let body = LoginRequest { username, password };
    let data = api.post("/login", &body, None).await?.into_result()?;
    serde_json::from_value(data).map_err(|e| format!("malformed login response: {e}"))
}

/// Fetch the programming-unit names available for a market and date range
/// via `GET /up/get-list`. The backend has no offer-unit counterpart.
///
/// # Errors
///
/// HTTP failures and JSend `fail`/`error` messages as strings.
pub async fn fetch_unit_list(
    api: &Api,
    token: Option<&str>,
    query: &MarketQuery,
) -> Result<Vec<String>, String> {
    let data = api.get(&unit_list_endpoint(query), token).await?.into_result()?;
    data_field(&data, "up_list")
}

/// Fetch scheduled programs for one or more units via
/// `POST /{up|uof}/programas/<mercado>`.
///
/// Rows come back as loosely-typed records (the backend serializes
/// dataframes), so tables render whatever columns arrive.
///
/// # Errors
///
/// HTTP failures and JSend `fail`/`error` messages as strings.
pub async fn fetch_programas(
    api: &Api,
    token: Option<&str>,
    kind: UnitKind,
    query: &MarketQuery,
    units: &[String],
    sentido: &str,
    agrupar: &str,
) -> Result<Vec<serde_json::Value>, String> {
    let body = consulta_body(query, Some(units), Some(sentido), None, agrupar);
    let data = api
        .post(&programas_endpoint(kind, &query.mercado), &body, token)
        .await?
        .into_result()?;
    data_rows(&data, "programas")
}

/// Fetch earnings for a single unit via `POST /{up|uof}/ganancias/<mercado>`.
///
/// # Errors
///
/// HTTP failures and JSend `fail`/`error` messages as strings.
pub async fn fetch_ganancias(
    api: &Api,
    token: Option<&str>,
    kind: UnitKind,
    query: &MarketQuery,
    unit: &str,
    sentido: &str,
    agrupar: &str,
) -> Result<Ganancias, String> {
    let units = [unit.to_owned()];
    let body = consulta_body(query, Some(&units[..]), Some(sentido), None, agrupar);
    let data = api
        .post(&ganancias_endpoint(kind, &query.mercado), &body, token)
        .await?
        .into_result()?;
    Ok(Ganancias {
        rows: data_rows(&data, "ganancias")?,
        totales: data_rows(&data, "ganancias_totales")?,
    })
}

/// Fetch market prices via `POST /precios/<mercado>`; `sesion` only applies
/// to the intraday market.
///
/// # Errors
///
/// HTTP failures and JSend `fail`/`error` messages as strings.
pub async fn fetch_precios(
    api: &Api,
    token: Option<&str>,
    query: &MarketQuery,
    sentido: &str,
    sesion: Option<u8>,
    agrupar: &str,
) -> Result<Vec<serde_json::Value>, String> {
    let body = consulta_body(query, None, Some(sentido), sesion, agrupar);
    let data = api
        .post(&precios_endpoint(&query.mercado), &body, token)
        .await?
        .into_result()?;
    data_rows(&data, "precios")
}
