//! Backend de la evidencia de viajes y combustible
//!
//! API HTTP para el libro de viajes mensual por vehículo (filas diarias,
//! exportación CSV, vista de impresión) y el reporte mensual de la flota.

pub mod cache;
pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

pub use client::{ExportedFile, LogbookClient};
pub use config::EnvironmentConfig;
pub use routes::create_router;
pub use state::AppState;
pub use utils::errors::{AppError, AppResult};
