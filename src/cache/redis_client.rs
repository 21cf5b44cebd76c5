use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, RedisResult};
use tracing::{debug, error, info, warn};

use super::CacheConfig;
use crate::repositories::KeyValueStore;
use crate::utils::errors::{AppError, AppResult};

/// Backend Redis para la evidencia, con connection manager async
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
    config: CacheConfig,
}

impl RedisStore {
    /// Conecta y verifica con `PING`
    pub async fn connect(config: CacheConfig) -> AppResult<Self> {
        info!("🔗 Conectando a Redis: {}", config.redis_url);

        let client = redis::Client::open(config.redis_url.clone())?;
        let manager = ConnectionManager::new(client).await?;

        let mut conn = manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");
        Ok(Self { manager, config })
    }

    fn make_key(&self, key: &str) -> String {
        namespaced_key(&self.config.namespace, key)
    }

    /// Verificar si Redis está conectado
    pub async fn is_connected(&self) -> bool {
        let mut conn = self.manager.clone();
        match redis::cmd("PING").query_async::<_, String>(&mut conn).await {
            Ok(response) => response == "PONG",
            Err(_) => false,
        }
    }
}

fn namespaced_key(namespace: &str, key: &str) -> String {
    if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{}:{}", namespace, key)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.manager.clone();
        let key = self.make_key(key);

        match conn.get::<_, Option<String>>(&key).await {
            Ok(Some(value)) => {
                debug!("📥 Redis HIT para clave: {}", key);
                Ok(Some(value))
            }
            Ok(None) => {
                debug!("❌ Redis MISS para clave: {}", key);
                Ok(None)
            }
            Err(e) => {
                warn!("⚠️ Error leyendo Redis para clave {}: {}", key, e);
                Err(AppError::from(e))
            }
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let key = self.make_key(key);

        let result: RedisResult<()> = conn.set(&key, value).await;
        match result {
            Ok(()) => {
                debug!("💾 Redis SET para clave: {}", key);
                Ok(())
            }
            Err(e) => {
                error!("❌ Error guardando en Redis para clave {}: {}", key, e);
                Err(AppError::from(e))
            }
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let mut conn = self.manager.clone();
        let key = self.make_key(key);

        let count: i64 = conn.del(&key).await?;
        debug!("🗑️ Redis DELETE para clave: {} (eliminados: {})", key, count);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
