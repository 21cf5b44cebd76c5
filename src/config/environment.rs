//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.
//! Todas las variables tienen un valor por defecto; un valor presente pero
//! inválido es un error de configuración.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::DEFAULT_DAYS_IN_MONTH;
use crate::repositories::DEFAULT_STORAGE_PREFIX;
use crate::utils::errors::{AppError, AppResult};

/// Backend de almacenamiento de la evidencia
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    File,
    Redis,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            "redis" => Ok(StorageBackend::Redis),
            other => Err(AppError::Configuration(format!(
                "STORAGE_BACKEND must be memory, file or redis, got '{}'",
                other
            ))),
        }
    }
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    /// Contraseña compartida opcional; `None` deja la aplicación abierta
    pub app_password: Option<String>,
    pub cors_origins: Vec<String>,
    pub storage_backend: StorageBackend,
    pub data_dir: PathBuf,
    pub redis_url: String,
    pub storage_prefix: String,
    pub days_in_month: usize,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            app_password: None,
            cors_origins: Vec::new(),
            storage_backend: StorageBackend::File,
            data_dir: PathBuf::from("data"),
            redis_url: "redis://localhost:6379".to_string(),
            storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
            days_in_month: DEFAULT_DAYS_IN_MONTH,
        }
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> AppResult<T> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Configuration(format!("{} has an invalid value '{}'", name, raw)))
}

impl EnvironmentConfig {
    /// Leer la configuración de las variables de entorno del proceso
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración desde cualquier fuente clave → valor
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => defaults.port,
        };

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse()?,
            None => defaults.storage_backend,
        };

        let days_in_month = match lookup("DAYS_IN_MONTH") {
            Some(raw) => parse_var("DAYS_IN_MONTH", &raw)?,
            None => defaults.days_in_month,
        };
        if !(1..=31).contains(&days_in_month) {
            return Err(AppError::Configuration(format!(
                "DAYS_IN_MONTH must be between 1 and 31, got {}",
                days_in_month
            )));
        }

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            app_password: lookup("APP_PASSWORD").filter(|p| !p.is_empty()),
            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            storage_backend,
            data_dir: lookup("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            storage_prefix: lookup("STORAGE_PREFIX").unwrap_or(defaults.storage_prefix),
            days_in_month,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn password_required(&self) -> bool {
        self.app_password.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.storage_backend, StorageBackend::File);
        assert_eq!(config.storage_prefix, "vozidlo-next-");
        assert_eq!(config.days_in_month, 31);
        assert!(!config.password_required());
        assert!(config.is_development());
    }

    #[test]
    fn test_values_are_read() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("APP_PASSWORD", "tajne"),
            ("STORAGE_BACKEND", "Redis"),
            ("CORS_ORIGINS", "http://a.sk, http://b.sk,"),
            ("ENVIRONMENT", "production"),
        ]))
        .unwrap();
        assert_eq!(config.server_url(), "127.0.0.1:8080");
        assert_eq!(config.app_password.as_deref(), Some("tajne"));
        assert_eq!(config.storage_backend, StorageBackend::Redis);
        assert_eq!(config.cors_origins, vec!["http://a.sk", "http://b.sk"]);
        assert!(config.is_production());
    }

    #[test]
    fn test_empty_password_means_open_access() {
        let config = EnvironmentConfig::from_lookup(lookup_from(&[("APP_PASSWORD", "")])).unwrap();
        assert!(!config.password_required());
    }

    #[test]
    fn test_invalid_values_are_configuration_errors() {
        for pairs in [
            [("PORT", "abc")],
            [("STORAGE_BACKEND", "postgres")],
            [("DAYS_IN_MONTH", "40")],
        ] {
            let err = EnvironmentConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, AppError::Configuration(_)));
        }
    }
}
