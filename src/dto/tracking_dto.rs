use serde::Serialize;

use crate::models::vehicle::Vehicle;

// Response de posiciones de vehículos en una ruta
#[derive(Debug, Serialize)]
pub struct VehiclePositionsResponse {
    pub success: bool,
    pub route_id: String,
    pub route_name: String,
    pub data: Vec<Vehicle>,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<bool>,
}

impl VehiclePositionsResponse {
    pub fn current(route_id: String, route_name: String, data: Vec<Vehicle>) -> Self {
        Self {
            success: true,
            route_id,
            route_name,
            count: data.len(),
            data,
            updated: None,
        }
    }

    /// Variante para el endpoint de updates, que avanza la simulación
    pub fn after_tick(route_id: String, route_name: String, data: Vec<Vehicle>) -> Self {
        Self {
            updated: Some(true),
            ..Self::current(route_id, route_name, data)
        }
    }
}

// Response de la flota completa (opcionalmente filtrada por región)
#[derive(Debug, Serialize)]
pub struct FleetResponse {
    pub success: bool,
    pub data: Vec<Vehicle>,
    pub count: usize,
}

impl FleetResponse {
    pub fn new(data: Vec<Vehicle>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}
