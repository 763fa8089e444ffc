use serde::{Deserialize, Serialize};

use crate::models::route::{Region, Route};

// Query de filtro por región (país y/o ciudad)
#[derive(Debug, Deserialize)]
pub struct RegionFilterQuery {
    pub country: Option<String>,
    pub city: Option<String>,
}

// Query de búsqueda de rutas
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    pub country: Option<String>,
}

// Filtros aplicados, devueltos junto con los resultados
#[derive(Debug, Serialize)]
pub struct AppliedFilters {
    pub country: Option<String>,
    pub city: Option<String>,
}

// Response de listado de rutas
#[derive(Debug, Serialize)]
pub struct RouteListResponse {
    pub success: bool,
    pub data: Vec<Route>,
    pub count: usize,
    pub filters: AppliedFilters,
}

impl RouteListResponse {
    pub fn new(data: Vec<Route>, filters: AppliedFilters) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            filters,
        }
    }
}

// Response de búsqueda de rutas
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<Route>,
    pub count: usize,
    pub query: String,
}

impl SearchResponse {
    pub fn new(data: Vec<Route>, query: String) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            query,
        }
    }
}

// Response de detalle de una ruta
#[derive(Debug, Serialize)]
pub struct RouteDetailResponse {
    pub success: bool,
    pub data: Route,
}

impl RouteDetailResponse {
    pub fn new(route: Route) -> Self {
        Self {
            success: true,
            data: route,
        }
    }
}

// Response de regiones disponibles
#[derive(Debug, Serialize)]
pub struct RegionListResponse {
    pub success: bool,
    pub data: Vec<Region>,
    pub count: usize,
}

impl RegionListResponse {
    pub fn new(regions: Vec<Region>) -> Self {
        Self {
            success: true,
            count: regions.len(),
            data: regions,
        }
    }
}
