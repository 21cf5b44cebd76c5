//! Configuración de Redis
//!
//! Este módulo contiene la configuración del backend Redis.

use serde::{Deserialize, Serialize};

/// Configuración de la conexión a Redis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheConfig {
    pub redis_url: String,
    /// Prefijo adicional delante de cada clave, vacío por defecto
    pub namespace: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            redis_url: "redis://localhost:6379".to_string(),
            namespace: String::new(),
        }
    }
}
