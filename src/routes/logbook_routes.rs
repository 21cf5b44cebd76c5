use axum::{
    extract::{Path, State},
    response::{Html, Response},
    routing::{get, patch},
    Json, Router,
};

use super::export_routes::csv_response;
use crate::controllers::LogbookController;
use crate::dto::logbook_dto::{EditRowRequest, MonthRowsResponse, SaveRowsRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_month_param;

/// Rutas por vehículo y mes, montadas bajo `/api/vehicles`
pub fn create_logbook_router() -> Router<AppState> {
    Router::new()
        .route("/:id/months/:month", get(load_month).put(save_month))
        .route("/:id/months/:month/rows/:index", patch(edit_row))
        .route("/:id/months/:month/export", get(export_month))
        .route("/:id/months/:month/print", get(print_month))
}

fn controller(state: &AppState) -> LogbookController {
    LogbookController::new(state.logbook.clone(), state.days_in_month())
}

async fn load_month(
    State(state): State<AppState>,
    Path((id, month)): Path<(String, String)>,
) -> Result<Json<MonthRowsResponse>, AppError> {
    let month = validate_month_param(&month)?;
    Ok(Json(controller(&state).load_month(&id, month).await?))
}

async fn save_month(
    State(state): State<AppState>,
    Path((id, month)): Path<(String, String)>,
    Json(request): Json<SaveRowsRequest>,
) -> Result<Json<MonthRowsResponse>, AppError> {
    let month = validate_month_param(&month)?;
    Ok(Json(controller(&state).save_month(&id, month, request.rows).await?))
}

async fn edit_row(
    State(state): State<AppState>,
    Path((id, month, index)): Path<(String, String, usize)>,
    Json(request): Json<EditRowRequest>,
) -> Result<Json<MonthRowsResponse>, AppError> {
    let month = validate_month_param(&month)?;
    Ok(Json(controller(&state).edit_row(&id, month, index, request).await?))
}

async fn export_month(
    State(state): State<AppState>,
    Path((id, month)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let month = validate_month_param(&month)?;
    let document = controller(&state).export_month(&id, month).await?;
    Ok(csv_response(document))
}

async fn print_month(
    State(state): State<AppState>,
    Path((id, month)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let month = validate_month_param(&month)?;
    Ok(Html(controller(&state).print_month(&id, month).await?))
}
