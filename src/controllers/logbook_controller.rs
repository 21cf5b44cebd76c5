use chrono::Local;
use tracing::{debug, info, warn};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::logbook_dto::{EditRowRequest, MonthRowsResponse, MonthStats};
use crate::models::{empty_rows, month_label, DayRow};
use crate::repositories::LogbookRepository;
use crate::services::{
    apply_edit, build_export, filled_count, render_print_view, show, total_km, ExportDocument,
};
use crate::utils::errors::AppResult;

pub struct LogbookController {
    repository: LogbookRepository,
    vehicles: VehicleController,
    days_in_month: usize,
}

impl LogbookController {
    pub fn new(repository: LogbookRepository, days_in_month: usize) -> Self {
        Self {
            vehicles: VehicleController::new(repository.clone()),
            repository,
            days_in_month,
        }
    }

    /// Filas guardadas. Sin registro o con JSON ilegible son filas vacías;
    /// un fallo del backend se propaga.
    async fn stored_rows(&self, vehicle_id: &str, month: u32) -> AppResult<Vec<DayRow>> {
        match self.repository.load_rows(vehicle_id, month).await {
            Ok(Some(rows)) => Ok(rows),
            Ok(None) => {
                debug!("📭 Sin filas para {} mes {}, filas vacías", vehicle_id, month);
                Ok(empty_rows(self.days_in_month))
            }
            Err(e) if e.is_serialization() => {
                warn!("⚠️ Filas de {} mes {} ilegibles, filas vacías: {}", vehicle_id, month, e);
                Ok(empty_rows(self.days_in_month))
            }
            Err(e) => Err(e),
        }
    }

    /// Solo para lecturas: cualquier fallo se muestra como filas vacías
    async fn rows_or_default(&self, vehicle_id: &str, month: u32) -> Vec<DayRow> {
        match self.stored_rows(vehicle_id, month).await {
            Ok(rows) => rows,
            Err(e) => {
                warn!("⚠️ No se pudieron leer las filas de {} mes {}: {}", vehicle_id, month, e);
                empty_rows(self.days_in_month)
            }
        }
    }

    fn response(vehicle_id: &str, month: u32, rows: Vec<DayRow>) -> MonthRowsResponse {
        let total = total_km(&rows);
        MonthRowsResponse {
            vehicle_id: vehicle_id.to_string(),
            month,
            month_label: month_label(month),
            stats: MonthStats {
                total_km: total,
                total_km_display: show(Some(total)),
                filled_days: filled_count(&rows),
            },
            rows,
        }
    }

    pub async fn load_month(&self, vehicle_id: &str, month: u32) -> AppResult<MonthRowsResponse> {
        self.vehicles.find(vehicle_id).await?;
        let rows = self.rows_or_default(vehicle_id, month).await;
        Ok(Self::response(vehicle_id, month, rows))
    }

    pub async fn save_month(
        &self,
        vehicle_id: &str,
        month: u32,
        rows: Vec<DayRow>,
    ) -> AppResult<MonthRowsResponse> {
        self.vehicles.find(vehicle_id).await?;
        self.repository.save_rows(vehicle_id, month, &rows).await?;
        info!("💾 Guardadas {} filas de {} mes {}", rows.len(), vehicle_id, month);
        Ok(Self::response(vehicle_id, month, rows))
    }

    /// Edita una celda, aplica el autorrelleno y guarda el resultado
    pub async fn edit_row(
        &self,
        vehicle_id: &str,
        month: u32,
        index: usize,
        request: EditRowRequest,
    ) -> AppResult<MonthRowsResponse> {
        self.vehicles.find(vehicle_id).await?;
        let rows = self.stored_rows(vehicle_id, month).await?;
        let updated = apply_edit(&rows, index, request.field, &request.value)?;
        self.repository.save_rows(vehicle_id, month, &updated).await?;
        debug!("✏️ Fila {} de {} mes {} editada ({:?})", index, vehicle_id, month, request.field);
        Ok(Self::response(vehicle_id, month, updated))
    }

    pub async fn export_month(&self, vehicle_id: &str, month: u32) -> AppResult<ExportDocument> {
        let vehicle = self.vehicles.find(vehicle_id).await?;
        let rows = self.rows_or_default(vehicle_id, month).await;
        let document = build_export(&vehicle.label, &month.to_string(), &month_label(month), &rows);
        info!("📤 Exportación CSV: {}", document.filename);
        Ok(document)
    }

    pub async fn print_month(&self, vehicle_id: &str, month: u32) -> AppResult<String> {
        let vehicle = self.vehicles.find(vehicle_id).await?;
        let rows = self.rows_or_default(vehicle_id, month).await;
        render_print_view(&vehicle.label, &month_label(month), &rows, Local::now())
    }
}
