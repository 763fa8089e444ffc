//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su estado de simulación.
//! Los vehículos se crean una vez por ruta y se mutan en cada tick.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

use crate::models::route::{Coordinates, TransportMode};

/// Estado operacional del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VehicleStatus {
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
}

/// Próxima parada con su tiempo estimado de llegada
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextStop {
    pub name: String,
    #[serde(rename = "eta")]
    pub eta_minutes: u32,
}

/// Vehicle principal - estado mutable de la simulación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub route_id: String,
    pub route_name: String,
    #[serde(rename = "type")]
    pub mode: TransportMode,
    pub position: Coordinates,
    /// Velocidad en km/h
    pub speed: u32,
    /// Rumbo en grados [0, 360)
    pub heading: u16,
    /// Las dos próximas paradas en orden de llegada
    pub next_stops: [NextStop; 2],
    pub capacity: u32,
    pub occupancy: u32,
    pub status: VehicleStatus,
    pub last_updated: DateTime<Utc>,
}
