//! Modelos del reporte mensual
//!
//! Periodo consultado (año, mes) con sus límites, resúmenes por vehículo
//! y el resumen de toda la flota.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{validation_error, AppResult};

/// Mensaje devuelto cuando el año o el mes faltan o son inválidos
pub const INVALID_PERIOD_MESSAGE: &str = "Chýba alebo je zlé ?year=YYYY&month=MM";

pub const MONTH_LABELS: [&str; 12] = [
    "Január",
    "Február",
    "Marec",
    "Apríl",
    "Máj",
    "Jún",
    "Júl",
    "August",
    "September",
    "Október",
    "November",
    "December",
];

/// Nombre del mes para cabeceras y exportaciones
pub fn month_label(month: u32) -> String {
    match month {
        1..=12 => MONTH_LABELS[(month - 1) as usize].to_string(),
        _ => format!("Mesiac {}", month),
    }
}

/// Periodo (año, mes) validado con su primer y último instante
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub year: i32,
    pub month: u32,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl ReportPeriod {
    /// Año positivo y mes `1..=12`; en otro caso error de validación
    pub fn new(year: i64, month: i64) -> AppResult<Self> {
        if year <= 0 || !(1..=12).contains(&month) {
            return Err(validation_error(INVALID_PERIOD_MESSAGE));
        }
        let year = i32::try_from(year).map_err(|_| validation_error(INVALID_PERIOD_MESSAGE))?;
        let month = month as u32;

        let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };

        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| validation_error(INVALID_PERIOD_MESSAGE))?;
        let next_start = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or_else(|| validation_error(INVALID_PERIOD_MESSAGE))?;

        Ok(Self {
            year,
            month,
            start,
            end: next_start - Duration::nanoseconds(1),
        })
    }

    /// Primer instante del mes
    pub fn month_start(&self) -> NaiveDateTime {
        self.start
    }

    /// Último instante del último día del mes (inclusivo)
    pub fn month_end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, at: &NaiveDateTime) -> bool {
        *at >= self.start && *at <= self.end
    }
}

/// Resumen mensual de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: String,
    pub plate: String,
    pub name: String,
    pub km: f64,
    pub liters: f64,
    pub cost: f64,
    pub l_per_100: Option<f64>,
    pub avg_price_per_liter: Option<f64>,
}

/// Resumen de toda la flota
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetSummary {
    pub km: f64,
    pub liters: f64,
    pub cost: f64,
    pub l_per_100: Option<f64>,
    pub avg_price_per_liter: Option<f64>,
}

/// Respuesta del reporte mensual
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub items: Vec<MonthlySummary>,
    pub summary: FleetSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_bounds() {
        let period = ReportPeriod::new(2025, 11).unwrap();
        assert_eq!(period.month_start().to_string(), "2025-11-01 00:00:00");
        assert_eq!(period.month_end().date(), NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
        assert!(period.contains(&NaiveDate::from_ymd_opt(2025, 11, 30).unwrap().and_hms_opt(23, 59, 59).unwrap()));
        assert!(!period.contains(&NaiveDate::from_ymd_opt(2025, 12, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()));
    }

    #[test]
    fn test_december_rolls_over_year() {
        let period = ReportPeriod::new(2024, 12).unwrap();
        assert_eq!(period.month_end().date(), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_leap_february() {
        let period = ReportPeriod::new(2024, 2).unwrap();
        assert_eq!(period.month_end().date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_invalid_periods() {
        assert!(ReportPeriod::new(0, 5).is_err());
        assert!(ReportPeriod::new(-3, 5).is_err());
        assert!(ReportPeriod::new(2025, 0).is_err());
        assert!(ReportPeriod::new(2025, 13).is_err());
        assert!(ReportPeriod::new(9_999_999_999, 1).is_err());
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label(1), "Január");
        assert_eq!(month_label(11), "November");
        assert_eq!(month_label(0), "Mesiac 0");
    }

    #[test]
    fn test_summary_wire_names() {
        let summary = MonthlySummary {
            vehicle_id: "v1".into(),
            plate: "MT123AB".into(),
            name: "Octavia".into(),
            km: 0.0,
            liters: 0.0,
            cost: 0.0,
            l_per_100: None,
            avg_price_per_liter: None,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["vehicleId"], "v1");
        assert!(value["l_per_100"].is_null());
        assert!(value["avg_price_per_liter"].is_null());
    }
}
