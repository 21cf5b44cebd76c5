use std::sync::Arc;
use tracing::info;

use crate::dto::report_dto::ReportQuery;
use crate::models::report::INVALID_PERIOD_MESSAGE;
use crate::models::{MonthlyReport, ReportPeriod};
use crate::repositories::FleetRepository;
use crate::services::aggregate_month;
use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::parse_integer_param;

pub struct ReportController {
    fleet: Arc<FleetRepository>,
}

impl ReportController {
    pub fn new(fleet: Arc<FleetRepository>) -> Self {
        Self { fleet }
    }

    /// Reporte mensual de la flota. Año o mes ausentes, no numéricos o
    /// fuera de rango son error de validación y no se agrega nada.
    pub fn monthly_report(&self, query: &ReportQuery) -> AppResult<MonthlyReport> {
        let year = parse_integer_param(query.year.as_deref())
            .ok_or_else(|| validation_error(INVALID_PERIOD_MESSAGE))?;
        let month = parse_integer_param(query.month.as_deref())
            .ok_or_else(|| validation_error(INVALID_PERIOD_MESSAGE))?;
        let period = ReportPeriod::new(year, month)?;

        let report = aggregate_month(
            &period,
            self.fleet.vehicles(),
            self.fleet.odometer(),
            self.fleet.fuel(),
        );
        info!(
            "📊 Reporte mensual {}/{}: {} vehículos, {} km",
            period.month,
            period.year,
            report.items.len(),
            report.summary.km
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(year: Option<&str>, month: Option<&str>) -> ReportQuery {
        ReportQuery {
            year: year.map(String::from),
            month: month.map(String::from),
        }
    }

    #[test]
    fn test_sample_fleet_november() {
        let controller = ReportController::new(Arc::new(FleetRepository::sample().unwrap()));
        let report = controller.monthly_report(&query(Some("2025"), Some("11"))).unwrap();
        assert_eq!(report.items.len(), 2);
        assert_eq!(report.items[0].km, 1250.0);
        assert_eq!(report.items[0].l_per_100, Some(4.42));
    }

    #[test]
    fn test_invalid_queries() {
        let controller = ReportController::new(Arc::new(FleetRepository::default()));
        for (year, month) in [
            (Some("2025"), Some("13")),
            (Some("0"), Some("11")),
            (None, Some("11")),
            (Some("2025"), None),
            (Some("abc"), Some("11")),
            (Some("2025"), Some("11.5")),
        ] {
            let err = controller.monthly_report(&query(year, month)).unwrap_err();
            assert_eq!(err.to_string(), format!("Validation error: {}", INVALID_PERIOD_MESSAGE));
        }
    }
}
