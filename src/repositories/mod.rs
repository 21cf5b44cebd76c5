//! Repositories
//!
//! Acceso al almacenamiento de la evidencia (backends clave-valor) y a los
//! datos en memoria de la flota.

pub mod file_store;
pub mod fleet_repository;
pub mod key_value_store;
pub mod logbook_repository;

pub use file_store::FileStore;
pub use fleet_repository::FleetRepository;
pub use key_value_store::{KeyValueStore, MemoryStore};
pub use logbook_repository::{LogbookRepository, StorageKeys, DEFAULT_STORAGE_PREFIX};
