//! Cache
//!
//! Backend Redis para el almacenamiento de la evidencia.

pub mod cache_config;
pub mod redis_client;

pub use cache_config::CacheConfig;
pub use redis_client::RedisStore;
