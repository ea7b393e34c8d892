//! Compile-time configuration for the API endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Flask backend serves the bundled client and exposes the market API on
//! the same origin in production; dev builds point at a local backend via the
//! `API_BASE_URL` environment variable at compile time.

/// Base URL for every market API request.
///
/// Overridden at build time with `API_BASE_URL=... trunk build`; defaults to
/// the local Flask dev server.
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};
