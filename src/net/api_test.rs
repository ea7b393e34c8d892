use super::*;

fn january() -> MarketQuery {
    MarketQuery {
        fecha_inicial: "2024-01-01".to_owned(),
        fecha_final: "2024-01-31".to_owned(),
        mercado: "diario".to_owned(),
    }
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn unit_list_endpoint_formats_expected_query() {
    assert_eq!(
        unit_list_endpoint(&january()),
        "/up/get-list?fecha_inicial=2024-01-01&fecha_final=2024-01-31&mercado=diario"
    );
}

#[test]
fn consulta_endpoints_put_market_in_the_path() {
    assert_eq!(programas_endpoint(UnitKind::Up, "diario"), "/up/programas/diario");
    assert_eq!(ganancias_endpoint(UnitKind::Uof, "secundaria"), "/uof/ganancias/secundaria");
    assert_eq!(precios_endpoint("intradiario"), "/precios/intradiario");
}

// =============================================================
// Request body
// =============================================================

#[test]
fn consulta_body_wraps_parameters_in_entrada_api() {
    let units = ["ACE3".to_owned(), "ABO1".to_owned()];
    let query = january();
    let body = consulta_body(&query, Some(&units[..]), Some("subir"), None, "hora");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "entradaAPI": {
                "fecha_inicial": "2024-01-01",
                "fecha_final": "2024-01-31",
                "up": "ACE3,ABO1",
                "mercado": "diario",
                "sentido": "subir",
                "agrupar": "hora"
            }
        })
    );
}

#[test]
fn consulta_body_skips_units_and_sesion_when_absent() {
    let query = january();
    let body = consulta_body(&query, None, Some("bajar"), None, "dia");
    let value = serde_json::to_value(&body).unwrap();
    let entrada = &value["entradaAPI"];
    assert!(entrada.get("up").is_none());
    assert!(entrada.get("sesion").is_none());
    assert_eq!(entrada["agrupar"], serde_json::json!("dia"));
}

#[test]
fn consulta_body_carries_sesion_for_intraday() {
    let query = MarketQuery { mercado: "intradiario".to_owned(), ..january() };
    let body = consulta_body(&query, None, Some("subir"), Some(3), "hora");
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["entradaAPI"]["sesion"], serde_json::json!(3));
    assert_eq!(value["entradaAPI"]["mercado"], serde_json::json!("intradiario"));
}
