use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::ReportController;
use crate::dto::report_dto::{LegacyReportEcho, ReportQuery};
use crate::models::MonthlyReport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new().route("/", get(monthly_report))
}

/// Ruta legacy fuera de `/api`: solo devuelve la query recibida
pub fn create_legacy_report_router() -> Router<AppState> {
    Router::new().route("/reports-monthly", get(legacy_monthly_report))
}

async fn monthly_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<MonthlyReport>, AppError> {
    let controller = ReportController::new(state.fleet.clone());
    Ok(Json(controller.monthly_report(&query)?))
}

async fn legacy_monthly_report(Query(query): Query<ReportQuery>) -> Json<LegacyReportEcho> {
    Json(LegacyReportEcho {
        report: "monthly".to_string(),
        year: query.year,
        month: query.month,
    })
}
