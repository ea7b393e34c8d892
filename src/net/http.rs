//! The configured HTTP client for the market API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error so pure logic stays testable.
//!
//! ERROR HANDLING
//! ==============
//! All traffic funnels through one response interceptor: successful
//! responses pass through unchanged, failures are logged here once and then
//! propagated to the caller unchanged. No retry, no transformation; pages
//! own the user-visible handling.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;

use super::types::JsendEnvelope;
use crate::config;

/// Shared client bound to one base endpoint.
///
/// Constructed once in `App` and handed to pages by reference; avoids each
/// page re-reading configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Api {
    base_url: String,
}

impl Default for Api {
    fn default() -> Self {
        Self::new()
    }
}

impl Api {
    /// Client against the environment-configured endpoint.
    pub fn new() -> Self {
        Self::with_base_url(config::API_BASE_URL)
    }

    /// Client against an explicit endpoint. Trailing slashes are dropped so
    /// joined URLs never double up.
    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// GET `path`, attaching the bearer token when one is present.
    ///
    /// # Errors
    ///
    /// Network failures and non-2xx statuses, as logged-and-propagated
    /// message strings.
    #[cfg(feature = "csr")]
    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<JsendEnvelope, String> {
        let mut request = gloo_net::http::Request::get(&self.url(path));
        if let Some(header) = bearer_header(token) {
            request = request.header("Authorization", &header);
        }
        let response = intercept(request.send().await)?;
        parse_envelope(response).await
    }

    #[cfg(not(feature = "csr"))]
    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<JsendEnvelope, String> {
        let _ = (path, token);
        Err("not available outside the browser".to_owned())
    }

    /// POST a JSON `body` to `path`, attaching the bearer token when one is
    /// present.
    ///
    /// # Errors
    ///
    /// Serialization, network, and non-2xx failures as message strings.
    #[cfg(feature = "csr")]
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: Option<&str>,
    ) -> Result<JsendEnvelope, String> {
        let mut request = gloo_net::http::Request::post(&self.url(path));
        if let Some(header) = bearer_header(token) {
            request = request.header("Authorization", &header);
        }
        let request = request
            .json(body)
            .map_err(|e| format!("Serialization error: {e}"))?;
        let response = intercept(request.send().await)?;
        parse_envelope(response).await
    }

    #[cfg(not(feature = "csr"))]
    pub async fn post<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: Option<&str>,
    ) -> Result<JsendEnvelope, String> {
        let _ = (path, body, token);
        Err("not available outside the browser".to_owned())
    }
}

/// Response interceptor: pass 2xx through, log everything else once and
/// re-reject with the same message the caller receives.
#[cfg(feature = "csr")]
fn intercept(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<gloo_net::http::Response, String> {
    let response = match sent {
        Ok(response) => response,
        Err(e) => {
            let message = network_error_message(&e.to_string());
            log::error!("{message}");
            return Err(message);
        }
    };
    if !response.ok() {
        let message = http_error_message(response.status(), &response.status_text());
        log::error!("{message}");
        return Err(message);
    }
    Ok(response)
}

#[cfg(feature = "csr")]
async fn parse_envelope(response: gloo_net::http::Response) -> Result<JsendEnvelope, String> {
    response
        .json::<JsendEnvelope>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}

/// `Authorization` header value for an outgoing request, when the session
/// holds a token.
pub fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|token| format!("Bearer {token}"))
}

/// Join base and path with exactly one slash between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base_url = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base_url}/{path}")
}

pub(crate) fn network_error_message(detail: &str) -> String {
    format!("Network error: {detail}")
}

pub(crate) fn http_error_message(status: u16, status_text: &str) -> String {
    format!("HTTP {status}: {status_text}")
}
