use serde::{Deserialize, Serialize};

use crate::models::{DayRow, RowField};

/// Filas de un mes con las estadísticas que muestra la tabla
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRowsResponse {
    pub vehicle_id: String,
    pub month: u32,
    pub month_label: String,
    pub rows: Vec<DayRow>,
    pub stats: MonthStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthStats {
    pub total_km: f64,
    /// Igual que en la tabla: `0` se muestra vacío
    pub total_km_display: String,
    pub filled_days: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveRowsRequest {
    pub rows: Vec<DayRow>,
}

/// Edición de una celda: el valor llega tal cual lo escribió el usuario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRowRequest {
    pub field: RowField,
    #[serde(default)]
    pub value: String,
}
