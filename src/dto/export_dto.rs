use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::models::DayRow;
use crate::services::csv_export_service::FALLBACK_SLUG;

/// Cuerpo de `POST /api/export`. Todos los campos son opcionales.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    #[serde(default)]
    pub vehicle_label: Option<String>,
    #[serde(default, deserialize_with = "lenient_month")]
    pub month: Option<u32>,
    #[serde(default)]
    pub month_label: Option<String>,
    #[serde(default, deserialize_with = "rows_or_empty")]
    pub rows: Vec<DayRow>,
}

// `rows` que no es un array cuenta como vacío; un array con filas
// inválidas sí es un error
fn rows_or_empty<'de, D>(deserializer: D) -> Result<Vec<DayRow>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(serde::de::Error::custom))
            .collect(),
        _ => Ok(Vec::new()),
    }
}

// El mes llega como número o como texto (`11` o `"11"`)
fn lenient_month<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|m| u32::try_from(m).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

impl ExportRequest {
    pub fn vehicle_label(&self) -> &str {
        self.vehicle_label.as_deref().unwrap_or(FALLBACK_SLUG)
    }

    pub fn month(&self) -> u32 {
        self.month.unwrap_or(0)
    }

    pub fn month_label(&self) -> String {
        self.month_label
            .clone()
            .unwrap_or_else(|| format!("Mesiac {}", self.month()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_empty_body() {
        let request: ExportRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.vehicle_label(), "vozidlo");
        assert_eq!(request.month(), 0);
        assert_eq!(request.month_label(), "Mesiac 0");
        assert!(request.rows.is_empty());
    }

    #[test]
    fn test_non_array_rows_count_as_empty() {
        let request: ExportRequest =
            serde_json::from_str(r#"{"vehicleLabel":"Octavia","month":11,"rows":"nope"}"#).unwrap();
        assert!(request.rows.is_empty());
        assert_eq!(request.month_label(), "Mesiac 11");
    }

    #[test]
    fn test_rows_are_read() {
        let request: ExportRequest = serde_json::from_str(
            r#"{"month":3,"monthLabel":"Marec","rows":[{"day":1,"startKm":null,"endKm":null,"diff":null,"consumption":null,"fuelRemaining":null,"route":"","note":"servis"}]}"#,
        )
        .unwrap();
        assert_eq!(request.rows.len(), 1);
        assert_eq!(request.rows[0].note, "servis");
        assert_eq!(request.month_label(), "Marec");
    }

    #[test]
    fn test_month_as_text() {
        let request: ExportRequest = serde_json::from_str(r#"{"month":"7"}"#).unwrap();
        assert_eq!(request.month(), 7);
        assert_eq!(request.month_label(), "Mesiac 7");
    }
}
