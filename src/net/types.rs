//! Response DTOs for the market API boundary.
//!
//! DESIGN
//! ======
//! The backend wraps every payload in a JSend-style envelope
//! (`status` + optional `data` + optional `message`); these types mirror it
//! so endpoint code stays schema-driven instead of poking at raw JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Envelope status as emitted by the backend's response maker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsendStatus {
    /// Request handled, `data` carries the payload.
    Success,
    /// Client-side problem (bad parameters, missing token).
    Fail,
    /// Server-side failure.
    Error,
    /// Request handled but with a caveat in `message`.
    Warning,
}

/// JSend-style response envelope. `data` and `message` are each omitted by
/// the backend when empty, never null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsendEnvelope {
    pub status: JsendStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl JsendEnvelope {
    /// Collapse the envelope into the payload or the backend's message.
    ///
    /// `success` and `warning` both carry usable data; `fail` and `error`
    /// surface the message unchanged so callers can show it as-is.
    ///
    /// # Errors
    ///
    /// Returns the envelope `message` (or a placeholder when the backend
    /// omitted one) for `fail` and `error` statuses.
    pub fn into_result(self) -> Result<serde_json::Value, String> {
        match self.status {
            JsendStatus::Success | JsendStatus::Warning => {
                Ok(self.data.unwrap_or(serde_json::Value::Null))
            }
            JsendStatus::Fail | JsendStatus::Error => {
                Err(self.message.unwrap_or_else(|| "request failed".to_owned()))
            }
        }
    }
}

/// Identity payload returned by a successful `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
    /// Unique user identifier.
    pub user_id: String,
    /// Display name.
    pub user_name: String,
}

/// Extract a named field from an envelope payload as a typed value.
///
/// The backend nests each result under a key (`up_list`, `programas`, ...);
/// missing keys degrade to a descriptive message rather than a panic.
///
/// # Errors
///
/// Returns a message naming the key when it is absent or has the wrong shape.
pub fn data_field<T: serde::de::DeserializeOwned>(
    data: &serde_json::Value,
    key: &str,
) -> Result<T, String> {
    let field = data
        .get(key)
        .ok_or_else(|| format!("response missing field: {key}"))?;
    serde_json::from_value(field.clone()).map_err(|e| format!("malformed field {key}: {e}"))
}

/// Extract a row array from an envelope payload.
///
/// Dataframe results arrive double-encoded: the backend serializes rows with
/// pandas' `to_json` and ships the resulting string inside the envelope, so
/// the field is a JSON string containing an array. Empty results skip that
/// step and arrive as a plain array. Both shapes decode here.
///
/// # Errors
///
/// Returns a message naming the key when it is absent, not a string or
/// array, or when the embedded string is not valid JSON rows.
pub fn data_rows(data: &serde_json::Value, key: &str) -> Result<Vec<serde_json::Value>, String> {
    let field = data
        .get(key)
        .ok_or_else(|| format!("response missing field: {key}"))?;
    match field {
        serde_json::Value::String(raw) => {
            serde_json::from_str(raw).map_err(|e| format!("malformed field {key}: {e}"))
        }
        serde_json::Value::Array(rows) => Ok(rows.clone()),
        other => Err(format!(
            "malformed field {key}: expected rows, got {other}"
        )),
    }
}
