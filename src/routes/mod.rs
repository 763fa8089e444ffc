pub mod geofence_routes;
pub mod route_routes;
pub mod tracking_routes;
pub mod zone_routes;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Ensambla la aplicación completa: rutas de la API bajo /api,
/// índice de endpoints en la raíz y las capas de middleware.
pub fn create_app(state: AppState) -> Router {
    // En producción con orígenes configurados el CORS se restringe;
    // en desarrollo queda abierto
    let cors = if state.config.is_production() && !state.config.cors_origins.is_empty() {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let api = Router::new()
        .merge(route_routes::create_route_router())
        .merge(tracking_routes::create_tracking_router())
        .merge(zone_routes::create_zone_router())
        .merge(geofence_routes::create_geofence_router())
        .route("/health", get(health_check));

    Router::new()
        .route("/", get(home))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Índice de la API con el mapa de endpoints disponibles
async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Transit Tracking API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "regions": "/api/regions",
            "routes": "/api/routes",
            "search": "/api/routes/search?q=<query>",
            "route_details": "/api/routes/<route_id>",
            "tracking": "/api/tracking/<route_id>",
            "tracking_updates": "/api/tracking/<route_id>/updates",
            "all_vehicles": "/api/tracking/all",
            "zones": "/api/zones",
            "zone_details": "/api/zones/<zone_id>",
            "zone_vote": "/api/zones/<zone_id>/vote",
            "zone_by_location": "/api/zones/location?lat=<lat>&lng=<lng>",
            "geofence_zones": "/api/geofence/zones",
            "geofence_check": "/api/geofence/check?lat=<lat>&lng=<lng>",
            "health": "/api/health"
        }
    }))
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "transit-tracking-api"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::config::environment::EnvironmentConfig;
    use crate::repositories::InMemoryZoneStore;

    fn demo_state() -> AppState {
        let config = EnvironmentConfig {
            jwt_secret: "test-secret".to_string(),
            sim_seed: Some(42),
            ..EnvironmentConfig::default()
        };
        AppState::build(config, Arc::new(InMemoryZoneStore::seeded())).expect("estado de prueba")
    }

    #[tokio::test]
    async fn test_health_endpoint_responds_ok() {
        let app = create_app(demo_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_path_returns_404() {
        let app = create_app(demo_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/does-not-exist")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
