//! Modelo de Vehicle
//!
//! Vehículos de la evidencia de viajes (identificador + etiqueta visible)
//! y vehículos de la flota usados por el reporte mensual.

use serde::{Deserialize, Serialize};

pub const DEFAULT_VEHICLE_ID: &str = "vozidlo-1";
pub const DEFAULT_VEHICLE_LABEL: &str = "Moje vozidlo";

/// Vehículo de la evidencia. Solo la etiqueta es editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub label: String,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Vehículo que se crea cuando no hay ninguno guardado
    pub fn default_vehicle() -> Self {
        Self::new(DEFAULT_VEHICLE_ID, DEFAULT_VEHICLE_LABEL)
    }
}

/// Vehículo de la flota del reporte mensual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetVehicle {
    pub id: String,
    pub plate: String,
    pub name: String,
}
