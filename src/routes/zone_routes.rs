use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};

use crate::dto::zone_dto::{
    LocationQuery, VoteRequest, VoteResponse, ZoneDetailResponse, ZoneListResponse,
};
use crate::middleware::auth::authenticate_voter;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_zone_router() -> Router<AppState> {
    Router::new()
        .route("/zones", get(get_all_zones))
        .route("/zones/location", get(get_zone_by_location))
        .route("/zones/:zone_id", get(get_zone))
        .route("/zones/:zone_id/vote", post(submit_vote))
}

/// Todas las zonas con su clasificación actual y el backend activo
async fn get_all_zones(
    State(state): State<AppState>,
) -> Result<Json<ZoneListResponse>, AppError> {
    let zones = state.zones.list_zones().await?;
    Ok(Json(ZoneListResponse::new(zones, state.zones.source())))
}

async fn get_zone(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
) -> Result<Json<ZoneDetailResponse>, AppError> {
    let zone = state.zones.get_zone(&zone_id).await?;
    Ok(Json(ZoneDetailResponse::new(zone)))
}

/// Registra un voto +1 (seguro) o -1 (peligro). Las requests sin token
/// votan como anónimas; un token Bearer presente debe ser válido.
async fn submit_vote(
    State(state): State<AppState>,
    Path(zone_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, AppError> {
    let voter_id = authenticate_voter(&headers, &state.config)?;

    let outcome = state
        .zones
        .submit_vote(&zone_id, &voter_id, request.vote)
        .await?;

    Ok(Json(VoteResponse::from(outcome)))
}

async fn get_zone_by_location(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<ZoneDetailResponse>, AppError> {
    let (lat, lng) = query.coordinates()?;
    let zone = state.zones.locate_zone(lat, lng).await?;
    Ok(Json(ZoneDetailResponse::new(zone)))
}
