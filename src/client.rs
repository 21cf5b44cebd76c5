//! Cliente HTTP de la evidencia
//!
//! Este módulo contiene el cliente para los endpoints de exportación CSV y
//! del reporte mensual. Un fallo de red o un estado no 2xx es un
//! `AppError::Transport` con el texto de la respuesta; no hay reintentos.

use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{header, Client, Response};
use tracing::{debug, warn};

use crate::dto::export_dto::ExportRequest;
use crate::middleware::auth::PASSWORD_HEADER;
use crate::models::MonthlyReport;
use crate::utils::errors::{AppError, AppResult};

pub const FALLBACK_FILENAME: &str = "evidencia-export.csv";

lazy_static! {
    static ref FILENAME: Regex = Regex::new(r#"filename="?([^";]+)"?"#).unwrap();
}

/// Fichero descargado del endpoint de exportación
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedFile {
    pub filename: String,
    pub content: String,
}

/// Nombre de fichero del header `Content-Disposition`
pub fn filename_from_disposition(disposition: Option<&str>) -> String {
    disposition
        .and_then(|value| FILENAME.captures(value))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

/// Cliente HTTP para el backend de la evidencia
#[derive(Debug, Clone)]
pub struct LogbookClient {
    client: Client,
    base_url: String,
    password: Option<String>,
}

impl LogbookClient {
    /// Crear nuevo cliente para `base_url` (p. ej. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            password: None,
        })
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.password {
            Some(password) => request.header(PASSWORD_HEADER, password),
            None => request,
        }
    }

    async fn ensure_success(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        warn!("⚠️ Respuesta HTTP {}: {}", status, body);
        Err(AppError::Transport(format!("HTTP {}: {}", status, body)))
    }

    /// Exportar filas a CSV vía `POST /api/export`
    pub async fn export_csv(&self, request: &ExportRequest) -> AppResult<ExportedFile> {
        let response = self
            .authorize(self.client.post(self.url("/api/export")))
            .json(request)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let filename = filename_from_disposition(
            response
                .headers()
                .get(header::CONTENT_DISPOSITION)
                .and_then(|v| v.to_str().ok()),
        );
        let content = response.text().await?;
        debug!("📥 CSV recibido: {} ({} bytes)", filename, content.len());

        Ok(ExportedFile { filename, content })
    }

    /// Reporte mensual de la flota vía `GET /api/reports-monthly`
    pub async fn monthly_report(&self, year: i32, month: u32) -> AppResult<MonthlyReport> {
        let response = self
            .authorize(self.client.get(self.url("/api/reports-monthly")))
            .query(&[("year", year.to_string()), ("month", month.to_string())])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
