use serde::{Deserialize, Serialize};

use crate::models::zone::{StorageSource, VoteOutcome, Zone, ZoneBounds, ZoneColor};
use crate::utils::errors::{validation_error, AppError};

// Query de ubicación compartida por lookup de zona y geofencing
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl LocationQuery {
    /// Parsea el par lat/lng. Un parámetro ausente o no numérico
    /// se trata igual: la query es inválida.
    pub fn coordinates(&self) -> Result<(f64, f64), AppError> {
        let lat = self.lat.as_deref().and_then(|s| s.parse::<f64>().ok());
        let lng = self.lng.as_deref().and_then(|s| s.parse::<f64>().ok());

        match (lat, lng) {
            (Some(lat), Some(lng)) => Ok((lat, lng)),
            _ => Err(validation_error(
                "location",
                "lat and lng query parameters are required",
            )),
        }
    }
}

// Request de voto sobre una zona
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub vote: i32,
}

// Response de zona (con clasificación derivada del score)
#[derive(Debug, Serialize)]
pub struct ZoneResponse {
    pub id: String,
    pub name: String,
    pub bounds: ZoneBounds,
    pub score: i32,
    pub zone_color: ZoneColor,
    pub vote_count: i64,
}

impl From<Zone> for ZoneResponse {
    fn from(zone: Zone) -> Self {
        Self {
            zone_color: zone.zone_color(),
            id: zone.id,
            name: zone.name,
            bounds: zone.bounds,
            score: zone.score,
            vote_count: zone.vote_count,
        }
    }
}

// Response de listado de zonas, con el backend activo
#[derive(Debug, Serialize)]
pub struct ZoneListResponse {
    pub success: bool,
    pub count: usize,
    pub source: StorageSource,
    pub zones: Vec<ZoneResponse>,
}

impl ZoneListResponse {
    pub fn new(zones: Vec<Zone>, source: StorageSource) -> Self {
        let zones: Vec<ZoneResponse> = zones.into_iter().map(ZoneResponse::from).collect();
        Self {
            success: true,
            count: zones.len(),
            source,
            zones,
        }
    }
}

// Response de una sola zona
#[derive(Debug, Serialize)]
pub struct ZoneDetailResponse {
    pub success: bool,
    pub zone: ZoneResponse,
}

impl ZoneDetailResponse {
    pub fn new(zone: Zone) -> Self {
        Self {
            success: true,
            zone: zone.into(),
        }
    }
}

// Response de voto registrado
#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub success: bool,
    pub message: String,
    pub new_score: i32,
    pub new_zone_color: ZoneColor,
}

impl From<VoteOutcome> for VoteResponse {
    fn from(outcome: VoteOutcome) -> Self {
        Self {
            success: true,
            message: format!("Vote recorded for {}", outcome.zone_name),
            new_score: outcome.new_score,
            new_zone_color: outcome.new_zone_color,
        }
    }
}
