use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::geofence_dto::{
    GeofenceCheckResponse, GeofenceZoneDetailResponse, GeofenceZoneListResponse,
};
use crate::dto::zone_dto::LocationQuery;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_geofence_router() -> Router<AppState> {
    Router::new()
        .route("/geofence/zones", get(get_geofence_zones))
        .route("/geofence/zones/category/:category", get(get_zones_by_category))
        .route("/geofence/zones/:zone_id", get(get_geofence_zone))
        .route("/geofence/check", get(check_location))
}

async fn get_geofence_zones(State(state): State<AppState>) -> Json<GeofenceZoneListResponse> {
    Json(GeofenceZoneListResponse::new(state.geofence.list().to_vec()))
}

async fn get_zones_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Json<GeofenceZoneListResponse> {
    let zones = state
        .geofence
        .by_category(&category)
        .into_iter()
        .cloned()
        .collect();

    Json(GeofenceZoneListResponse::new(zones))
}

async fn get_geofence_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Result<Json<GeofenceZoneDetailResponse>, AppError> {
    let zone = state
        .geofence
        .get(&zone_id)
        .cloned()
        .ok_or_else(|| not_found_error("Geofence zone", &zone_id))?;

    Ok(Json(GeofenceZoneDetailResponse::new(zone)))
}

/// Chequea la posición del usuario contra todas las zonas de interés
async fn check_location(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<GeofenceCheckResponse>, AppError> {
    let (lat, lng) = query.coordinates()?;
    let check = state.geofence.check_location(lat, lng);

    Ok(Json(GeofenceCheckResponse::new(lat, lng, check)))
}
