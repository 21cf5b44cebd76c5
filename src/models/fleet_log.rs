//! Registros de la flota
//!
//! Lecturas de odómetro y repostajes por vehículo, tratados como series
//! temporales por el motor de agregación mensual.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lectura del odómetro de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OdometerReading {
    pub vehicle_id: String,
    pub at: NaiveDateTime,
    pub odometer: f64,
}

/// Repostaje de un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelPurchase {
    pub vehicle_id: String,
    pub at: NaiveDateTime,
    pub liters: f64,
    pub price_total: f64,
}
