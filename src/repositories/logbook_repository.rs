use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::debug;

use super::key_value_store::KeyValueStore;
use crate::models::{DayRow, Vehicle};
use crate::utils::errors::AppResult;

pub const DEFAULT_STORAGE_PREFIX: &str = "vozidlo-next-";

/// Claves del almacenamiento: una para la lista de vehículos y una por
/// cada par (vehículo, mes)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn vehicles(&self) -> String {
        format!("{}vehicles", self.prefix)
    }

    pub fn month(&self, vehicle_id: &str, month: u32) -> String {
        format!("{}{}-{}", self.prefix, vehicle_id, month)
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PREFIX)
    }
}

// Repository de la evidencia sobre cualquier backend clave-valor.
// Un JSON corrupto devuelve AppError::Serialization; quien llama decide
// si recupera con valores por defecto.
#[derive(Clone)]
pub struct LogbookRepository {
    store: Arc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl LogbookRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn backend_name(&self) -> &'static str {
        self.store.backend_name()
    }

    pub async fn load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        match self.store.get(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => {
                debug!("📭 Sin datos para clave: {}", key);
                Ok(None)
            }
        }
    }

    pub async fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, raw).await
    }

    pub async fn remove(&self, key: &str) -> AppResult<()> {
        self.store.remove(key).await
    }

    pub async fn load_rows(&self, vehicle_id: &str, month: u32) -> AppResult<Option<Vec<DayRow>>> {
        self.load(&self.keys.month(vehicle_id, month)).await
    }

    pub async fn save_rows(&self, vehicle_id: &str, month: u32, rows: &[DayRow]) -> AppResult<()> {
        self.save(&self.keys.month(vehicle_id, month), rows).await
    }

    pub async fn remove_rows(&self, vehicle_id: &str, month: u32) -> AppResult<()> {
        self.remove(&self.keys.month(vehicle_id, month)).await
    }

    pub async fn load_vehicles(&self) -> AppResult<Option<Vec<Vehicle>>> {
        self.load(&self.keys.vehicles()).await
    }

    pub async fn save_vehicles(&self, vehicles: &[Vehicle]) -> AppResult<()> {
        self.save(&self.keys.vehicles(), vehicles).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::empty_rows;
    use crate::repositories::key_value_store::MemoryStore;

    fn repository() -> (MemoryStore, LogbookRepository) {
        let store = MemoryStore::new();
        let repo = LogbookRepository::new(Arc::new(store.clone()), StorageKeys::default());
        (store, repo)
    }

    #[test]
    fn test_storage_keys() {
        let keys = StorageKeys::default();
        assert_eq!(keys.vehicles(), "vozidlo-next-vehicles");
        assert_eq!(keys.month("vozidlo-1", 11), "vozidlo-next-vozidlo-1-11");
    }

    #[tokio::test]
    async fn test_rows_roundtrip_field_for_field() {
        let (_, repo) = repository();
        let mut rows = empty_rows(31);
        rows[4].start_km = Some(200.0);
        rows[4].end_km = Some(250.5);
        rows[4].diff = Some(50.5);
        rows[7].refuel = Some(42.0);
        rows[7].note = "\"plná\" nádrž".to_string();

        repo.save_rows("v1", 11, &rows).await.unwrap();
        let loaded = repo.load_rows("v1", 11).await.unwrap();
        assert_eq!(loaded, Some(rows));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let (_, repo) = repository();
        assert_eq!(repo.load_rows("v1", 1).await.unwrap(), None);
        assert_eq!(repo.load_vehicles().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_state_is_serialization_error() {
        let (store, repo) = repository();
        store
            .set("vozidlo-next-v1-2", "{not json".to_string())
            .await
            .unwrap();
        let err = repo.load_rows("v1", 2).await.unwrap_err();
        assert!(err.is_serialization());
    }

    #[tokio::test]
    async fn test_unset_numbers_are_stored_as_null() {
        let (store, repo) = repository();
        repo.save_rows("v1", 3, &empty_rows(1)).await.unwrap();
        let raw = store.get("vozidlo-next-v1-3").await.unwrap().unwrap();
        assert!(raw.contains("\"startKm\":null"));
    }
}
