//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de parámetros de query/path.

use std::fmt::Display;

use crate::utils::errors::{validation_error, AppResult};

/// Validar que un string no esté vacío, devolviendo el valor recortado
pub fn validate_not_empty(value: &str, field: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(validation_error(format!("Field '{}' must not be empty", field)));
    }
    Ok(trimmed.to_string())
}

/// Validar que un valor esté en un rango específico (inclusivo)
pub fn validate_range<T: PartialOrd + Display>(value: T, min: T, max: T, field: &str) -> AppResult<T> {
    if value < min || value > max {
        return Err(validation_error(format!(
            "Field '{}' must be between {} and {}, got {}",
            field, min, max, value
        )));
    }
    Ok(value)
}

/// Convertir un parámetro textual a entero.
///
/// Acepta enteros (`"11"`) y decimales sin parte fraccionaria (`"11.0"`).
/// Vacío, texto, `NaN` o fracciones devuelven `None`.
pub fn parse_integer_param(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(number) = value.parse::<i64>() {
        return Some(number);
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() && number.fract() == 0.0 => Some(number as i64),
        _ => None,
    }
}

/// Validar el mes de un path (`1..=12`)
pub fn validate_month_param(raw: &str) -> AppResult<u32> {
    let month = parse_integer_param(Some(raw))
        .ok_or_else(|| validation_error(format!("Invalid month '{}'", raw)))?;
    validate_range(month, 1, 12, "month").map(|m| m as u32)
}
