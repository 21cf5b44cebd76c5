use axum::{
    body::Bytes,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use tracing::error;

use crate::controllers::ExportController;
use crate::services::csv_export_service::CSV_CONTENT_TYPE;
use crate::services::ExportDocument;
use crate::state::AppState;

pub const EXPORT_ERROR: &str = "Export error";

pub fn create_export_router() -> Router<AppState> {
    Router::new().route("/", post(export_csv))
}

/// Respuesta de descarga del CSV
pub fn csv_response(document: ExportDocument) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, document.content_disposition()),
        ],
        document.content,
    )
        .into_response()
}

// El cuerpo se lee crudo: cualquier fallo, incluido un JSON ilegible,
// responde 500 con texto plano
async fn export_csv(body: Bytes) -> Response {
    match ExportController::export(&body) {
        Ok(document) => csv_response(document),
        Err(e) => {
            error!("❌ Error exportando CSV: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, EXPORT_ERROR).into_response()
        }
    }
}
