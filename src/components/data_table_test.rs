use super::*;

#[test]
fn table_columns_come_from_first_row() {
    let rows = vec![
        serde_json::json!({"fecha": "2024-01-01", "hora": 1, "precio": 52.3}),
        serde_json::json!({"fecha": "2024-01-01", "hora": 2, "precio": 48.0}),
    ];
    assert_eq!(table_columns(&rows), vec!["fecha", "hora", "precio"]);
}

#[test]
fn table_columns_empty_for_no_rows() {
    assert!(table_columns(&[]).is_empty());
}

#[test]
fn table_columns_empty_for_non_object_rows() {
    let rows = vec![serde_json::json!([1, 2, 3])];
    assert!(table_columns(&rows).is_empty());
}

#[test]
fn cell_text_renders_strings_unquoted() {
    let row = serde_json::json!({"unidad": "ACE3"});
    assert_eq!(cell_text(&row, "unidad"), "ACE3");
}

#[test]
fn cell_text_renders_numbers_and_bools() {
    let row = serde_json::json!({"hora": 14, "festivo": false});
    assert_eq!(cell_text(&row, "hora"), "14");
    assert_eq!(cell_text(&row, "festivo"), "false");
}

#[test]
fn cell_text_blank_for_null_and_missing() {
    let row = serde_json::json!({"precio": null});
    assert_eq!(cell_text(&row, "precio"), "");
    assert_eq!(cell_text(&row, "no-such-column"), "");
}
