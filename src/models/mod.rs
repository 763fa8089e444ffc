//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos del catálogo de rutas,
//! la simulación de flota, las zonas de votación y el geofencing.

pub mod route;
pub mod vehicle;
pub mod zone;
pub mod geofence;
