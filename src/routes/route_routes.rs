use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::route_dto::{
    AppliedFilters, RegionFilterQuery, RegionListResponse, RouteDetailResponse, RouteListResponse,
    SearchQuery, SearchResponse,
};
use crate::models::route::Route;
use crate::services::route_catalog::all_regions;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, validation_error, AppError};

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/regions", get(get_regions))
        .route("/routes", get(get_routes))
        .route("/routes/search", get(search_routes))
        .route("/routes/:route_id", get(get_route_details))
}

async fn get_regions() -> Json<RegionListResponse> {
    Json(RegionListResponse::new(all_regions()))
}

async fn get_routes(
    State(state): State<AppState>,
    Query(query): Query<RegionFilterQuery>,
) -> Result<Json<RouteListResponse>, AppError> {
    let routes: Vec<Route> = state
        .catalog
        .filter(query.country.as_deref(), query.city.as_deref())
        .into_iter()
        .cloned()
        .collect();

    let filters = AppliedFilters {
        country: query.country,
        city: query.city,
    };

    Ok(Json(RouteListResponse::new(routes, filters)))
}

async fn search_routes(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let term = query.q.unwrap_or_default();
    if term.is_empty() {
        return Err(validation_error("q", "Search query is required"));
    }

    let results: Vec<Route> = state
        .catalog
        .search(&term, query.country.as_deref())
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(SearchResponse::new(results, term)))
}

async fn get_route_details(
    State(state): State<AppState>,
    Path(route_id): Path<String>,
) -> Result<Json<RouteDetailResponse>, AppError> {
    let route = state
        .catalog
        .get_by_id(&route_id)
        .cloned()
        .ok_or_else(|| not_found_error("Route", &route_id))?;

    Ok(Json(RouteDetailResponse::new(route)))
}
