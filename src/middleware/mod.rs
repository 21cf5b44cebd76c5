//! Middleware del sistema
//!
//! Este módulo contiene el middleware de la contraseña compartida y CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
