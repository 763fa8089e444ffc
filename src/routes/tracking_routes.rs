use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::route_dto::RegionFilterQuery;
use crate::dto::tracking_dto::{FleetResponse, VehiclePositionsResponse};
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_tracking_router() -> Router<AppState> {
    Router::new()
        .route("/tracking/all", get(get_all_vehicles))
        .route("/tracking/:route_id", get(get_vehicle_positions))
        .route("/tracking/:route_id/updates", get(get_vehicle_updates))
}

/// Posiciones actuales de los vehículos de una ruta, sin avanzar la simulación
async fn get_vehicle_positions(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> Result<Json<VehiclePositionsResponse>, AppError> {
    let route_name = state
        .catalog
        .get_by_id(&route_id)
        .map(|r| r.name.clone())
        .ok_or_else(|| not_found_error("Route", &route_id))?;

    let vehicles = state.fleet.read().await.vehicles_for_route(&route_id);

    Ok(Json(VehiclePositionsResponse::current(
        route_id, route_name, vehicles,
    )))
}

/// Avanza un tick de simulación sobre toda la flota y devuelve las
/// posiciones actualizadas de la ruta pedida
async fn get_vehicle_updates(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> Result<Json<VehiclePositionsResponse>, AppError> {
    let route_name = state
        .catalog
        .get_by_id(&route_id)
        .map(|r| r.name.clone())
        .ok_or_else(|| not_found_error("Route", &route_id))?;

    let vehicles = {
        let mut fleet = state.fleet.write().await;
        fleet.tick();
        fleet.vehicles_for_route(&route_id)
    };

    Ok(Json(VehiclePositionsResponse::after_tick(
        route_id, route_name, vehicles,
    )))
}

async fn get_all_vehicles(
    State(state): State<AppState>,
    Query(query): Query<RegionFilterQuery>,
) -> Result<Json<FleetResponse>, AppError> {
    let vehicles = state
        .fleet
        .read()
        .await
        .all_vehicles(query.country.as_deref(), query.city.as_deref());

    Ok(Json(FleetResponse::new(vehicles)))
}
