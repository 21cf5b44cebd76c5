//! Modelo de DayRow
//!
//! Un registro diario de la evidencia de viajes: tacómetro inicial/final,
//! kilómetros recorridos, consumo, combustible restante, repostaje,
//! ruta y nota. Se serializa en camelCase, igual que los datos guardados
//! por el cliente web.

use serde::{Deserialize, Deserializer, Serialize};

/// Número de días por defecto de un periodo
pub const DEFAULT_DAYS_IN_MONTH: usize = 31;

/// Fila de un día del mes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRow {
    pub day: u32,
    #[serde(default)]
    pub start_km: Option<f64>,
    #[serde(default)]
    pub end_km: Option<f64>,
    #[serde(default)]
    pub diff: Option<f64>,
    #[serde(default)]
    pub consumption: Option<f64>,
    #[serde(default)]
    pub fuel_remaining: Option<f64>,
    #[serde(default)]
    pub refuel: Option<f64>,
    #[serde(default, deserialize_with = "nullable_text")]
    pub route: String,
    #[serde(default, deserialize_with = "nullable_text")]
    pub note: String,
}

/// Campos editables de una fila
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowField {
    StartKm,
    EndKm,
    Diff,
    Consumption,
    FuelRemaining,
    Refuel,
    Route,
    Note,
}

impl RowField {
    /// Campos que recalculan `diff` al editarse
    pub fn is_odometer(self) -> bool {
        matches!(self, RowField::StartKm | RowField::EndKm)
    }
}

impl DayRow {
    /// Fila vacía para el día indicado
    pub fn empty(day: u32) -> Self {
        Self {
            day,
            start_km: None,
            end_km: None,
            diff: None,
            consumption: None,
            fuel_remaining: None,
            refuel: None,
            route: String::new(),
            note: String::new(),
        }
    }

    /// Una fila está "llena" si tiene cualquier campo numérico o
    /// cualquier texto no vacío. Solo las filas llenas se exportan.
    pub fn is_filled(&self) -> bool {
        self.start_km.is_some()
            || self.end_km.is_some()
            || self.diff.is_some()
            || self.consumption.is_some()
            || self.fuel_remaining.is_some()
            || self.refuel.is_some()
            || !self.route.trim().is_empty()
            || !self.note.trim().is_empty()
    }
}

/// Filas vacías `1..=days`
pub fn empty_rows(days: usize) -> Vec<DayRow> {
    (1..=days as u32).map(DayRow::empty).collect()
}

fn nullable_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rows() {
        let rows = empty_rows(DEFAULT_DAYS_IN_MONTH);
        assert_eq!(rows.len(), 31);
        assert_eq!(rows[0].day, 1);
        assert_eq!(rows[30].day, 31);
        assert!(rows.iter().all(|r| !r.is_filled()));
    }

    #[test]
    fn test_note_only_row_is_filled() {
        let mut row = DayRow::empty(4);
        row.note = "servis".to_string();
        assert!(row.is_filled());
    }

    #[test]
    fn test_whitespace_text_is_not_filled() {
        let mut row = DayRow::empty(4);
        row.route = "   ".to_string();
        assert!(!row.is_filled());
    }

    #[test]
    fn test_refuel_only_row_is_filled() {
        let mut row = DayRow::empty(9);
        row.refuel = Some(40.0);
        assert!(row.is_filled());
    }

    #[test]
    fn test_serialization_uses_camel_case_and_nulls() {
        let value = serde_json::to_value(DayRow::empty(1)).unwrap();
        assert_eq!(value["day"], 1);
        assert!(value["startKm"].is_null());
        assert!(value["fuelRemaining"].is_null());
        assert_eq!(value["route"], "");
    }

    #[test]
    fn test_deserialize_null_text_and_missing_fields() {
        let row: DayRow =
            serde_json::from_str(r#"{"day": 3, "endKm": 120.5, "route": null}"#).unwrap();
        assert_eq!(row.day, 3);
        assert_eq!(row.end_km, Some(120.5));
        assert_eq!(row.start_km, None);
        assert_eq!(row.route, "");
        assert_eq!(row.note, "");
    }

    #[test]
    fn test_row_field_names() {
        let field: RowField = serde_json::from_str(r#""fuelRemaining""#).unwrap();
        assert_eq!(field, RowField::FuelRemaining);
        assert!(RowField::EndKm.is_odometer());
        assert!(!RowField::Note.is_odometer());
    }
}
