//! Edición de filas diarias
//!
//! Transformación pura `apply_edit`: devuelve una copia nueva de las filas
//! con el campo editado, `diff` recalculado y el autorrelleno del
//! tacómetro inicial del día siguiente. También contiene las estadísticas
//! del mes (km totales, días rellenados).

use crate::models::{DayRow, RowField};
use crate::utils::errors::{validation_error, AppResult};

/// Convierte el texto de un input numérico: vacío o inválido es `None`,
/// se acepta coma decimal.
pub fn parse_numeric_input(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

/// `diff = endKm - startKm`. Valores iguales dejan `diff` vacío.
pub fn recompute_diff(row: &mut DayRow) {
    row.diff = match (row.start_km, row.end_km) {
        (Some(start), Some(end)) => {
            let diff = end - start;
            (diff != 0.0).then_some(diff)
        }
        _ => None,
    };
}

/// Aplica la edición de un campo sobre la fila `index` sin modificar `rows`.
///
/// Editar `endKm` copia el valor al `startKm` de la fila siguiente, si
/// existe. Solo se toca esa fila; no hay cascada.
pub fn apply_edit(
    rows: &[DayRow],
    index: usize,
    field: RowField,
    value: &str,
) -> AppResult<Vec<DayRow>> {
    if index >= rows.len() {
        return Err(validation_error(format!(
            "Row index {} out of range (0..{})",
            index,
            rows.len()
        )));
    }

    let mut updated = rows.to_vec();
    let row = &mut updated[index];

    match field {
        RowField::StartKm => row.start_km = parse_numeric_input(value),
        RowField::EndKm => row.end_km = parse_numeric_input(value),
        RowField::Diff => row.diff = parse_numeric_input(value),
        RowField::Consumption => row.consumption = parse_numeric_input(value),
        RowField::FuelRemaining => row.fuel_remaining = parse_numeric_input(value),
        RowField::Refuel => row.refuel = parse_numeric_input(value),
        RowField::Route => row.route = value.to_string(),
        RowField::Note => row.note = value.to_string(),
    }

    if field.is_odometer() {
        recompute_diff(row);
    }

    if field == RowField::EndKm {
        let end_km = row.end_km;
        if let Some(next) = updated.get_mut(index + 1) {
            next.start_km = end_km;
        }
    }

    Ok(updated)
}

/// Suma de `diff` de todas las filas
pub fn total_km(rows: &[DayRow]) -> f64 {
    rows.iter().filter_map(|r| r.diff).sum()
}

/// Filas con algún dato, en orden
pub fn filled_rows(rows: &[DayRow]) -> Vec<&DayRow> {
    rows.iter().filter(|r| r.is_filled()).collect()
}

pub fn filled_count(rows: &[DayRow]) -> usize {
    rows.iter().filter(|r| r.is_filled()).count()
}

/// Formato de números como en la tabla: `250`, `12.5`
pub fn format_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Valor para mostrar: `None` y `0` se muestran vacíos.
///
/// Mezcla "sin dato" con "cero kilómetros"; se conserva por compatibilidad
/// con las hojas ya exportadas.
pub fn show(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => v.to_string(),
        _ => String::new(),
    }
}
