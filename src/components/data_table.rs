//! Generic table over loosely-typed backend rows.
//!
//! DESIGN
//! ======
//! The backend serializes dataframes whose columns vary by market and query,
//! so the table derives its header from the first row instead of a fixed
//! schema.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use leptos::prelude::*;

/// Column names taken from the first row. Object keys arrive sorted, which
/// keeps the header stable across refetches.
pub fn table_columns(rows: &[serde_json::Value]) -> Vec<String> {
    rows.first()
        .and_then(serde_json::Value::as_object)
        .map(|row| row.keys().cloned().collect())
        .unwrap_or_default()
}

/// Cell text for one column of one row. Strings render unquoted; missing
/// and null cells render empty.
pub fn cell_text(row: &serde_json::Value, column: &str) -> String {
    match row.get(column) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

#[component]
pub fn DataTable(#[prop(into)] rows: Signal<Vec<serde_json::Value>>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    {move || {
                        table_columns(&rows.get())
                            .into_iter()
                            .map(|column| view! { <th>{column}</th> })
                            .collect_view()
                    }}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = rows.get();
                    let columns = table_columns(&rows);
                    rows.iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    {columns
                                        .iter()
                                        .map(|column| view! { <td>{cell_text(row, column)}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
