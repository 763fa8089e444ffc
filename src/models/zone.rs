//! Modelo de Zone
//!
//! Celdas rectangulares del mapa con clasificación de seguridad
//! derivada de los votos de la comunidad (Red/Yellow/Green).

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Clasificación de seguridad de una zona
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ZoneColor {
    /// Zona segura (score >= 5)
    Green,
    /// Zona de precaución (-5 < score < 5)
    Yellow,
    /// Zona de peligro (score <= -5)
    Red,
}

impl ZoneColor {
    /// Deriva la clasificación a partir del score acumulado.
    /// Nunca se almacena - siempre se recalcula en cada lectura.
    pub fn classify(score: i32) -> ZoneColor {
        if score >= 5 {
            ZoneColor::Green
        } else if score <= -5 {
            ZoneColor::Red
        } else {
            ZoneColor::Yellow
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneColor::Green => "green",
            ZoneColor::Yellow => "yellow",
            ZoneColor::Red => "red",
        }
    }
}

/// Bounding box de una zona (min < max en ambos ejes)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ZoneBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lng_min: f64,
    pub lng_max: f64,
}

impl ZoneBounds {
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        crate::utils::geo::point_in_rectangle(
            lat,
            lng,
            self.lat_min,
            self.lat_max,
            self.lng_min,
            self.lng_max,
        )
    }
}

/// Zone principal - celda del mapa con score de votación acumulado
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub bounds: ZoneBounds,
    pub score: i32,
    pub vote_count: i64,
}

impl Zone {
    /// Clasificación derivada del score actual
    pub fn zone_color(&self) -> ZoneColor {
        ZoneColor::classify(self.score)
    }
}

/// Voto individual - registro append-only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    pub id: Uuid,
    pub zone_id: String,
    pub voter_id: String,
    pub value: i32,
    pub created_at: DateTime<Utc>,
}

/// Resultado de registrar un voto
#[derive(Debug, Clone, Serialize)]
pub struct VoteOutcome {
    pub zone_name: String,
    pub new_score: i32,
    pub new_zone_color: ZoneColor,
}

/// Backend de almacenamiento activo para las zonas
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageSource {
    Postgres,
    Memory,
}
