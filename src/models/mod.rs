//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos de la evidencia de viajes
//! y del reporte mensual de la flota.

pub mod day_row;
pub mod fleet_log;
pub mod report;
pub mod vehicle;

pub use day_row::{empty_rows, DayRow, RowField, DEFAULT_DAYS_IN_MONTH};
pub use fleet_log::{FuelPurchase, OdometerReading};
pub use report::{month_label, FleetSummary, MonthlyReport, MonthlySummary, ReportPeriod};
pub use vehicle::{FleetVehicle, Vehicle, DEFAULT_VEHICLE_ID, DEFAULT_VEHICLE_LABEL};
