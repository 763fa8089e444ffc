//! Modelo de GeofenceZone
//!
//! Zonas circulares de puntos de interés para chequeos de proximidad.
//! Independientes de las zonas de votación (grid).

use serde::{Deserialize, Serialize};

/// Zona circular de geofencing centrada en un punto de interés
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeofenceZone {
    pub id: String,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: f64,
    pub category: String,
}

/// Resultado de chequear un punto contra una zona de geofencing
#[derive(Debug, Clone, Serialize)]
pub struct GeofenceStatus {
    pub zone_id: String,
    pub zone_name: String,
    pub is_inside: bool,
    /// Distancia al centro, redondeada a 2 decimales
    pub distance_meters: f64,
    pub description: String,
}
