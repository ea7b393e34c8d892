//! Shared validation for the data-page query forms.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::api::MarketQuery;

/// Markets the backend exposes query endpoints for.
pub const MERCADOS: &[&str] = &[
    "diario",
    "intradiario",
    "intradiario-continuo",
    "secundaria",
    "terciaria",
    "restricciones",
    "desvios",
];

/// Offer directions accepted by the backend.
pub const SENTIDOS: &[&str] = &["subir", "bajar"];

/// Grouping granularities the backend aggregates results by.
pub const AGRUPACIONES: &[&str] = &["hora", "dia", "mes", "año"];

/// Validate the common date-range-and-market inputs into a `MarketQuery`.
///
/// Dates are ISO `YYYY-MM-DD` strings, so ordering them lexicographically
/// matches chronological order.
///
/// # Errors
///
/// A user-facing message for missing fields or an inverted range.
pub fn validate_market_query(
    fecha_inicial: &str,
    fecha_final: &str,
    mercado: &str,
) -> Result<MarketQuery, &'static str> {
    let fecha_inicial = fecha_inicial.trim();
    let fecha_final = fecha_final.trim();
    let mercado = mercado.trim();
    if fecha_inicial.is_empty() || fecha_final.is_empty() || mercado.is_empty() {
        return Err("Enter both dates and a market.");
    }
    if fecha_inicial > fecha_final {
        return Err("Start date must not be after end date.");
    }
    Ok(MarketQuery {
        fecha_inicial: fecha_inicial.to_owned(),
        fecha_final: fecha_final.to_owned(),
        mercado: mercado.to_owned(),
    })
}

/// True when the market requires a session number on price queries.
pub fn sesion_required(mercado: &str) -> bool {
    mercado == "intradiario"
}

/// Parse the optional intraday session input. Empty means "not applicable".
///
/// # Errors
///
/// A user-facing message when the input is not a session number 1-7.
pub fn parse_sesion(input: &str) -> Result<Option<u8>, &'static str> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    input
        .parse::<u8>()
        .ok()
        .filter(|sesion| (1..=7).contains(sesion))
        .map(Some)
        .ok_or("Session must be a number between 1 and 7.")
}

/// Split the free-form unit input on commas and whitespace.
pub fn parse_units_input(input: &str) -> Vec<String> {
    input
        .split([',', ' ', '\t'])
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_owned)
        .collect()
}
