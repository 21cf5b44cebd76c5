//! Services module
//!
//! Este módulo contiene la lógica de negocio pura de la aplicación:
//! agregación mensual, edición de filas, exportación CSV y vista de impresión.
//! Ningún servicio hace I/O; los controllers se encargan del almacenamiento.

pub mod csv_export_service;
pub mod monthly_report_service;
pub mod print_service;
pub mod row_edit_service;

pub use csv_export_service::{build_export, slugify, vehicle_slug, ExportDocument};
pub use monthly_report_service::aggregate_month;
pub use print_service::render_print_view;
pub use row_edit_service::{apply_edit, filled_count, show, total_km};
