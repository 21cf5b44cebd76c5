use tracing::info;

use crate::dto::export_dto::ExportRequest;
use crate::services::{build_export, ExportDocument};
use crate::utils::errors::AppResult;

pub struct ExportController;

impl ExportController {
    /// CSV a partir del cuerpo crudo de la request
    pub fn export(body: &[u8]) -> AppResult<ExportDocument> {
        let request: ExportRequest = serde_json::from_slice(body)?;
        let document = build_export(
            request.vehicle_label(),
            &request.month().to_string(),
            &request.month_label(),
            &request.rows,
        );
        info!("📤 Exportación CSV: {} ({} bytes)", document.filename, document.content.len());
        Ok(document)
    }
}
