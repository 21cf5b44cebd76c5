use serde::{Deserialize, Serialize};

/// Query `?year=&month=` sin tipar: la validación la hace el controller
/// para devolver siempre el mismo mensaje de error
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportQuery {
    pub year: Option<String>,
    pub month: Option<String>,
}

/// Respuesta de la ruta legacy `/reports-monthly`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegacyReportEcho {
    pub report: String,
    pub year: Option<String>,
    pub month: Option<String>,
}
