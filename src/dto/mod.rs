//! Data Transfer Objects
//!
//! Cuerpos de request y response de la API HTTP.

pub mod api_response;
pub mod auth_dto;
pub mod export_dto;
pub mod logbook_dto;
pub mod report_dto;
pub mod vehicle_dto;

pub use api_response::ApiResponse;
pub use auth_dto::{LoginRequest, LoginResponse};
pub use export_dto::ExportRequest;
pub use logbook_dto::{EditRowRequest, MonthRowsResponse, MonthStats, SaveRowsRequest};
pub use report_dto::{LegacyReportEcho, ReportQuery};
pub use vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleListResponse};
