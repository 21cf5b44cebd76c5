//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] validator::ValidationErrors),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Presentation blocked: {0}")]
    PresentationBlocked(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::Storage(format!("Redis: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl AppError {
    /// El estado persistido no se pudo leer (JSON corrupto)
    pub fn is_serialization(&self) -> bool {
        matches!(self, AppError::Serialization(_))
    }

    /// Fallo del backend de almacenamiento
    pub fn is_storage(&self) -> bool {
        matches!(self, AppError::Storage(_))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::PresentationBlocked(_) => StatusCode::CONFLICT,
            AppError::Transport(_) => StatusCode::BAD_GATEWAY,
            AppError::Serialization(_)
            | AppError::Storage(_)
            | AppError::Configuration(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Validation(msg) => {
                warn!("⚠️ Validation error: {}", msg);
                ErrorResponse {
                    error: msg,
                    message: "The provided data is invalid".to_string(),
                    details: None,
                    code: Some("VALIDATION_ERROR".to_string()),
                }
            }

            AppError::InvalidPayload(e) => {
                warn!("⚠️ Invalid payload: {}", e);
                ErrorResponse {
                    error: "Validation Error".to_string(),
                    message: "The provided data is invalid".to_string(),
                    details: Some(json!(e)),
                    code: Some("VALIDATION_ERROR".to_string()),
                }
            }

            AppError::Serialization(e) => {
                error!("❌ Serialization error: {}", e);
                ErrorResponse {
                    error: "Serialization Error".to_string(),
                    message: "Stored data could not be read".to_string(),
                    details: Some(json!({ "serde_error": e.to_string() })),
                    code: Some("SERIALIZATION_ERROR".to_string()),
                }
            }

            AppError::Storage(msg) => {
                error!("❌ Storage error: {}", msg);
                ErrorResponse {
                    error: "Storage Error".to_string(),
                    message: "An error occurred while accessing the storage".to_string(),
                    details: Some(json!({ "storage_error": msg })),
                    code: Some("STORAGE_ERROR".to_string()),
                }
            }

            AppError::Transport(msg) => {
                error!("❌ Transport error: {}", msg);
                ErrorResponse {
                    error: "Transport Error".to_string(),
                    message: "An error occurred while communicating with the server".to_string(),
                    details: Some(json!({ "transport_error": msg })),
                    code: Some("TRANSPORT_ERROR".to_string()),
                }
            }

            AppError::PresentationBlocked(msg) => {
                warn!("⚠️ Presentation blocked: {}", msg);
                ErrorResponse {
                    error: "Presentation Blocked".to_string(),
                    message: msg,
                    details: None,
                    code: Some("PRESENTATION_BLOCKED".to_string()),
                }
            }

            AppError::NotFound(msg) => {
                warn!("⚠️ Resource not found: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                }
            }

            AppError::Unauthorized(msg) => {
                warn!("🔒 Unauthorized access: {}", msg);
                ErrorResponse {
                    error: "Unauthorized".to_string(),
                    message: msg,
                    details: None,
                    code: Some("UNAUTHORIZED".to_string()),
                }
            }

            AppError::Configuration(msg) => {
                error!("❌ Configuration error: {}", msg);
                ErrorResponse {
                    error: "Configuration Error".to_string(),
                    message: "The server is misconfigured".to_string(),
                    details: None,
                    code: Some("CONFIGURATION_ERROR".to_string()),
                }
            }

            AppError::Internal(msg) => {
                error!("❌ Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "An unexpected error occurred".to_string(),
                    details: Some(json!({ "internal_error": msg })),
                    code: Some("INTERNAL_ERROR".to_string()),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación
pub fn validation_error(message: impl Into<String>) -> AppError {
    AppError::Validation(message.into())
}

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores internos
pub fn internal_error(message: &str) -> AppError {
    AppError::Internal(message.to_string())
}
