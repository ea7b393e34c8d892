use super::*;

// =============================================================
// Envelope deserialization
// =============================================================

#[test]
fn success_envelope_parses_with_data_and_message() {
    let envelope: JsendEnvelope = serde_json::from_str(
        r#"{"status":"success","message":"Data retrieved successfully","data":{"up_list":["ACE3"]}}"#,
    )
    .unwrap();
    assert_eq!(envelope.status, JsendStatus::Success);
    assert_eq!(envelope.data, Some(serde_json::json!({"up_list": ["ACE3"]})));
}

#[test]
fn envelope_parses_when_backend_omits_data() {
    let envelope: JsendEnvelope =
        serde_json::from_str(r#"{"status":"fail","message":"A valid token is missing"}"#).unwrap();
    assert_eq!(envelope.status, JsendStatus::Fail);
    assert_eq!(envelope.data, None);
}

// =============================================================
// Envelope collapse
// =============================================================

#[test]
fn success_collapses_to_data() {
    let envelope = JsendEnvelope {
        status: JsendStatus::Success,
        data: Some(serde_json::json!({"k": 1})),
        message: Some("Data retrieved successfully".to_owned()),
    };
    assert_eq!(envelope.into_result(), Ok(serde_json::json!({"k": 1})));
}

#[test]
fn warning_still_carries_data() {
    let envelope = JsendEnvelope {
        status: JsendStatus::Warning,
        data: Some(serde_json::json!([1, 2])),
        message: Some("partial".to_owned()),
    };
    assert_eq!(envelope.into_result(), Ok(serde_json::json!([1, 2])));
}

#[test]
fn fail_and_error_surface_message_unchanged() {
    for status in [JsendStatus::Fail, JsendStatus::Error] {
        let envelope = JsendEnvelope {
            status,
            data: None,
            message: Some("Missing required parameters".to_owned()),
        };
        assert_eq!(envelope.into_result(), Err("Missing required parameters".to_owned()));
    }
}

#[test]
fn error_without_message_gets_placeholder() {
    let envelope = JsendEnvelope { status: JsendStatus::Error, data: None, message: None };
    assert_eq!(envelope.into_result(), Err("request failed".to_owned()));
}

// =============================================================
// Payload field extraction
// =============================================================

#[test]
fn data_field_extracts_typed_value() {
    let data = serde_json::json!({"up_list": ["ACE3", "ABO1"]});
    let list: Vec<String> = data_field(&data, "up_list").unwrap();
    assert_eq!(list, vec!["ACE3".to_owned(), "ABO1".to_owned()]);
}

#[test]
fn data_field_names_missing_key() {
    let data = serde_json::json!({});
    let result: Result<Vec<String>, String> = data_field(&data, "up_list");
    assert_eq!(result, Err("response missing field: up_list".to_owned()));
}

#[test]
fn data_field_reports_shape_mismatch() {
    let data = serde_json::json!({"up_list": 42});
    let result: Result<Vec<String>, String> = data_field(&data, "up_list");
    assert!(result.unwrap_err().starts_with("malformed field up_list:"));
}

// =============================================================
// Row extraction
// =============================================================

#[test]
fn data_rows_decodes_string_encoded_dataframe() {
    // Non-empty results ship pandas' to_json output as a string field.
    let data = serde_json::json!({
        "mercado": "diario",
        "programas": "[{\"FECHA\":\"2024-03-01T00:00:00.000\",\"UP\":\"ACE3\",\"ENERGIA\":12.5}]"
    });
    let rows = data_rows(&data, "programas").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["UP"], serde_json::json!("ACE3"));
    assert_eq!(rows[0]["ENERGIA"], serde_json::json!(12.5));
}

#[test]
fn data_rows_accepts_plain_array_for_empty_results() {
    let data = serde_json::json!({"mercado": "diario", "programas": []});
    assert_eq!(data_rows(&data, "programas"), Ok(vec![]));
}

#[test]
fn data_rows_names_missing_key() {
    let data = serde_json::json!({"mercado": "diario"});
    assert_eq!(
        data_rows(&data, "precios"),
        Err("response missing field: precios".to_owned())
    );
}

#[test]
fn data_rows_rejects_invalid_embedded_json() {
    let data = serde_json::json!({"ganancias": "not rows"});
    assert!(data_rows(&data, "ganancias").unwrap_err().starts_with("malformed field ganancias:"));
}

#[test]
fn data_rows_rejects_non_row_shapes() {
    let data = serde_json::json!({"ganancias": 42});
    assert_eq!(
        data_rows(&data, "ganancias"),
        Err("malformed field ganancias: expected rows, got 42".to_owned())
    );
}

// =============================================================
// Login payload
// =============================================================

#[test]
fn login_response_parses_from_envelope_data() {
    let data = serde_json::json!({
        "token": "abc.def.ghi",
        "user_id": "17",
        "user_name": "Ana"
    });
    let parsed: LoginResponse = serde_json::from_value(data).unwrap();
    assert_eq!(parsed.token, "abc.def.ghi");
    assert_eq!(parsed.user_id, "17");
    assert_eq!(parsed.user_name, "Ana");
}
