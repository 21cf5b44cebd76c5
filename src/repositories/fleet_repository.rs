use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{FleetVehicle, FuelPurchase, OdometerReading};
use crate::utils::errors::{internal_error, AppResult};

// Datos de la flota para el reporte mensual. No hay base de datos:
// son los arrays de muestra en memoria.
#[derive(Debug, Clone, Default)]
pub struct FleetRepository {
    vehicles: Vec<FleetVehicle>,
    odometer: Vec<OdometerReading>,
    fuel: Vec<FuelPurchase>,
}

fn day(year: i32, month: u32, day: u32) -> AppResult<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| internal_error("invalid sample date"))
}

impl FleetRepository {
    pub fn new(
        vehicles: Vec<FleetVehicle>,
        odometer: Vec<OdometerReading>,
        fuel: Vec<FuelPurchase>,
    ) -> Self {
        Self {
            vehicles,
            odometer,
            fuel,
        }
    }

    /// Flota de muestra: dos vehículos, cuatro lecturas y tres repostajes
    pub fn sample() -> AppResult<Self> {
        let vehicle = |id: &str, plate: &str, name: &str| FleetVehicle {
            id: id.to_string(),
            plate: plate.to_string(),
            name: name.to_string(),
        };
        let reading = |vehicle_id: &str, at: NaiveDateTime, odometer: f64| OdometerReading {
            vehicle_id: vehicle_id.to_string(),
            at,
            odometer,
        };
        let purchase = |vehicle_id: &str, at: NaiveDateTime, liters: f64, price_total: f64| FuelPurchase {
            vehicle_id: vehicle_id.to_string(),
            at,
            liters,
            price_total,
        };

        Ok(Self::new(
            vec![
                vehicle("v1", "MT123AB", "Octavia"),
                vehicle("v2", "ZA987XY", "Transit"),
            ],
            vec![
                reading("v1", day(2025, 10, 31)?, 100_000.0),
                reading("v1", day(2025, 11, 30)?, 101_250.0),
                reading("v2", day(2025, 10, 31)?, 220_000.0),
                // cae en diciembre: noviembre usa la lectura base
                reading("v2", day(2025, 12, 1)?, 220_510.0),
            ],
            vec![
                purchase("v1", day(2025, 11, 5)?, 25.2, 42.8),
                purchase("v1", day(2025, 11, 20)?, 30.0, 51.2),
                purchase("v2", day(2025, 11, 10)?, 40.0, 68.4),
            ],
        ))
    }

    pub fn vehicles(&self) -> &[FleetVehicle] {
        &self.vehicles
    }

    pub fn odometer(&self) -> &[OdometerReading] {
        &self.odometer
    }

    pub fn fuel(&self) -> &[FuelPurchase] {
        &self.fuel
    }
}
