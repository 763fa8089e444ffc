use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::geofence::{GeofenceStatus, GeofenceZone};
use crate::services::geofence_service::GeofenceCheck;

// Response de listado de zonas de geofencing
#[derive(Debug, Serialize)]
pub struct GeofenceZoneListResponse {
    pub success: bool,
    pub data: Vec<GeofenceZone>,
    pub count: usize,
}

impl GeofenceZoneListResponse {
    pub fn new(data: Vec<GeofenceZone>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

// Response de detalle de una zona de geofencing
#[derive(Debug, Serialize)]
pub struct GeofenceZoneDetailResponse {
    pub success: bool,
    pub data: GeofenceZone,
}

impl GeofenceZoneDetailResponse {
    pub fn new(zone: GeofenceZone) -> Self {
        Self {
            success: true,
            data: zone,
        }
    }
}

// Ubicación del usuario tal como se devuelve en la respuesta
#[derive(Debug, Serialize)]
pub struct CurrentLocation {
    pub latitude: f64,
    pub longitude: f64,
}

// Response del chequeo de geofencing: zonas adentro vs cercanas
#[derive(Debug, Serialize)]
pub struct GeofenceCheckResponse {
    pub success: bool,
    pub current_location: CurrentLocation,
    pub inside_zones: Vec<GeofenceStatus>,
    pub nearby_zones: Vec<GeofenceStatus>,
    pub timestamp: DateTime<Utc>,
}

impl GeofenceCheckResponse {
    pub fn new(latitude: f64, longitude: f64, check: GeofenceCheck) -> Self {
        Self {
            success: true,
            current_location: CurrentLocation { latitude, longitude },
            inside_zones: check.inside_zones,
            nearby_zones: check.nearby_zones,
            timestamp: Utc::now(),
        }
    }
}
