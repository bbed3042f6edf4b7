use serde_json::{json, Value};

/// A closed journal record in the journal service's native field naming,
/// closed `day` days after 2024-01-01.
pub fn native_closed(asset: &str, resultado: &str, pnl: f64, day: u32) -> Value {
    json!({
        "id": format!("t-{}-{}", asset, day),
        "activo": asset,
        "operacion": "LONG",
        "estatus": "Cerrado",
        "resultado": resultado,
        "ganancia_perdida_real": pnl,
        "fecha_operacion": format!("2024-01-{:02}", day),
        "fecha_finalizacion": format!("2024-01-{:02}T18:00:00Z", day),
        "sesion": "Londres",
        "estado_emocional": "Normal",
        "confluencia_porcentaje": 60.0
    })
}

/// Same record shape with English field names, as the distilled API describes it.
pub fn english_closed(asset: &str, outcome: &str, pnl: f64, day: u32) -> Value {
    json!({
        "id": format!("e-{}-{}", asset, day),
        "asset": asset,
        "direction": "LONG",
        "status": "CLOSED",
        "outcome": outcome,
        "realizedPnL": pnl,
        "openedAt": format!("2024-01-{:02}T08:00:00Z", day),
        "closedAt": format!("2024-01-{:02}T18:00:00Z", day),
        "session": "ASIA",
        "emotionalState": "Bien",
        "confluencePercentage": 60.0
    })
}

pub fn native_open(asset: &str) -> Value {
    json!({
        "activo": asset,
        "operacion": "SHORT",
        "estatus": "Abierto",
        "fecha_operacion": "2024-01-20"
    })
}

pub fn set(mut record: Value, key: &str, value: Value) -> Value {
    record[key] = value;
    record
}
