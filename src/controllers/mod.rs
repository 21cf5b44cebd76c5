//! Controllers
//!
//! Orquestan repositories y services para cada recurso de la API.

pub mod export_controller;
pub mod logbook_controller;
pub mod report_controller;
pub mod vehicle_controller;

pub use export_controller::ExportController;
pub use logbook_controller::LogbookController;
pub use report_controller::ReportController;
pub use vehicle_controller::VehicleController;
