//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores,
//! cálculo geoespacial y otras funcionalidades comunes.

pub mod errors;
pub mod geo;
