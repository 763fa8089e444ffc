//! Modelo de Route
//!
//! Este módulo contiene el struct Route, sus paradas y el modo de transporte.
//! Las rutas son de solo lectura después de la generación del catálogo.

use serde::{Deserialize, Serialize};

/// Modo de transporte de una ruta
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransportMode {
    Bus,
    Metro,
    Tram,
    #[serde(rename = "Light Rail")]
    LightRail,
}

impl TransportMode {
    /// Todos los modos, en el orden usado por el generador
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Bus,
        TransportMode::Metro,
        TransportMode::Tram,
        TransportMode::LightRail,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Bus => "Bus",
            TransportMode::Metro => "Metro",
            TransportMode::Tram => "Tram",
            TransportMode::LightRail => "Light Rail",
        }
    }
}

/// Par de coordenadas lat/lng
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Parada de una ruta, ordenada por el campo `order` (1-based)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub order: u32,
}

/// Route principal - entrada del catálogo de rutas
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub route_number: String,
    pub name: String,
    #[serde(rename = "type")]
    pub mode: TransportMode,
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub continent: String,
    pub stops: Vec<Stop>,
    pub path: Vec<Coordinates>,
    pub active: bool,
    pub frequency: String,
}

impl Route {
    /// Busca una parada por nombre y devuelve su índice en la secuencia
    pub fn stop_index_by_name(&self, name: &str) -> Option<usize> {
        self.stops.iter().position(|s| s.name == name)
    }
}

/// Región disponible en el catálogo (país + sus ciudades)
#[derive(Debug, Clone, Serialize)]
pub struct Region {
    pub code: String,
    pub name: String,
    pub continent: String,
    pub cities: Vec<String>,
}
