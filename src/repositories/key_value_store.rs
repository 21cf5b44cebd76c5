//! Almacenamiento clave-valor
//!
//! Interfaz común de los backends donde se guardan los registros de la
//! evidencia (lista de vehículos, filas por vehículo y mes) como JSON.
//! Última escritura gana; no hay transacciones.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::utils::errors::AppResult;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Valor guardado bajo `key`, `None` si no existe
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Borrar una clave inexistente no es un error
    async fn remove(&self, key: &str) -> AppResult<()>;

    fn backend_name(&self) -> &'static str;
}

/// Backend en memoria (desarrollo y tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        debug!("💾 Memory SET para clave: {}", key);
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        if entries.remove(key).is_some() {
            debug!("🗑️ Memory DELETE para clave: {}", key);
        }
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

/// Backend de tests que falla al leer (o escribir) las claves indicadas
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct FailingStore {
    pub inner: MemoryStore,
    failing_reads: Arc<RwLock<Vec<String>>>,
    failing_writes: Arc<RwLock<Vec<String>>>,
}

#[cfg(test)]
impl FailingStore {
    pub async fn fail_reads_of(&self, key: &str) {
        self.failing_reads.write().await.push(key.to_string());
    }

    pub async fn fail_writes_of(&self, key: &str) {
        self.failing_writes.write().await.push(key.to_string());
    }
}

#[cfg(test)]
#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.failing_reads.read().await.iter().any(|k| k == key) {
            return Err(crate::utils::errors::AppError::Storage(format!("read failed: {}", key)));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        if self.failing_writes.read().await.iter().any(|k| k == key) {
            return Err(crate::utils::errors::AppError::Storage(format!("write failed: {}", key)));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        self.inner.remove(key).await
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
