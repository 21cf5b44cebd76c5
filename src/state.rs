//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;
use tracing::info;

use crate::cache::{CacheConfig, RedisStore};
use crate::config::environment::{EnvironmentConfig, StorageBackend};
use crate::repositories::{
    FileStore, FleetRepository, KeyValueStore, LogbookRepository, MemoryStore, StorageKeys,
};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub logbook: LogbookRepository,
    pub fleet: Arc<FleetRepository>,
}

impl AppState {
    pub fn new(
        config: EnvironmentConfig,
        store: Arc<dyn KeyValueStore>,
        fleet: FleetRepository,
    ) -> Self {
        let keys = StorageKeys::new(config.storage_prefix.clone());
        Self {
            logbook: LogbookRepository::new(store, keys),
            fleet: Arc::new(fleet),
            config,
        }
    }

    /// Construye el estado con el backend indicado en la configuración
    pub async fn from_config(config: EnvironmentConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.storage_backend {
            StorageBackend::Memory => {
                info!("🧠 Almacenamiento en memoria (se pierde al reiniciar)");
                Arc::new(MemoryStore::new())
            }
            StorageBackend::File => Arc::new(FileStore::open(config.data_dir.clone()).await?),
            StorageBackend::Redis => {
                let cache_config = CacheConfig {
                    redis_url: config.redis_url.clone(),
                    ..CacheConfig::default()
                };
                Arc::new(RedisStore::connect(cache_config).await?)
            }
        };

        Ok(Self::new(config, store, FleetRepository::sample()?))
    }

    pub fn days_in_month(&self) -> usize {
        self.config.days_in_month
    }
}
