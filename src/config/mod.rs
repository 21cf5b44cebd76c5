//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del entorno y del almacenamiento.

pub mod environment;

pub use environment::*;
