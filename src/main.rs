use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

use transit_tracking::config::environment::EnvironmentConfig;
use transit_tracking::database::connection;
use transit_tracking::repositories::{InMemoryZoneStore, PostgresZoneStore, ZoneStore};
use transit_tracking::routes::create_app;
use transit_tracking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(if config.is_development() {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    info!("🚌 Transit Tracking - Geospatial Simulation & Zoning API");
    info!("========================================================");

    // El backend de zonas se elige una sola vez al arranque
    let zone_store = build_zone_store(&config).await;

    let state = AppState::build(config.clone(), zone_store)?;
    let app = create_app(state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Índice de la API");
    info!("   GET  /api/health - Health check");
    info!("🗺️ Endpoints de rutas:");
    info!("   GET  /api/regions - Regiones disponibles");
    info!("   GET  /api/routes - Listar rutas (filtros: country, city)");
    info!("   GET  /api/routes/search - Buscar rutas (q, country)");
    info!("   GET  /api/routes/:route_id - Detalle de ruta");
    info!("🚍 Endpoints de tracking:");
    info!("   GET  /api/tracking/all - Todos los vehículos (filtros: country, city)");
    info!("   GET  /api/tracking/:route_id - Posiciones actuales");
    info!("   GET  /api/tracking/:route_id/updates - Avanzar simulación y leer");
    info!("🛡️ Endpoints de zonas:");
    info!("   GET  /api/zones - Listar zonas con clasificación");
    info!("   GET  /api/zones/location - Zona que contiene una coordenada");
    info!("   GET  /api/zones/:zone_id - Detalle de zona");
    info!("   POST /api/zones/:zone_id/vote - Votar +1/-1 sobre una zona");
    info!("📍 Endpoints de geofencing:");
    info!("   GET  /api/geofence/zones - Zonas de interés");
    info!("   GET  /api/geofence/zones/category/:category - Filtrar por categoría");
    info!("   GET  /api/geofence/zones/:zone_id - Detalle de zona de interés");
    info!("   GET  /api/geofence/check - Chequear ubicación del usuario");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Selecciona el backend de zonas: Postgres si hay DATABASE_URL y la
/// conexión responde; de lo contrario el catálogo en memoria. Un fallo
/// de conexión degrada a memoria en modo solo lectura, nunca aborta
/// el arranque.
async fn build_zone_store(config: &EnvironmentConfig) -> Arc<dyn ZoneStore> {
    let Some(database_url) = config.database_url.as_deref() else {
        info!("💾 DATABASE_URL no configurada, usando zonas en memoria");
        return Arc::new(InMemoryZoneStore::seeded());
    };

    match connect_postgres_store(database_url).await {
        Ok(store) => {
            info!("✅ Almacenamiento de zonas en Postgres");
            Arc::new(store)
        }
        Err(e) => {
            warn!(
                "⚠️ Postgres no disponible ({}), usando fallback de solo lectura en memoria",
                e
            );
            Arc::new(InMemoryZoneStore::read_only_fallback())
        }
    }
}

async fn connect_postgres_store(database_url: &str) -> Result<PostgresZoneStore> {
    let pool = connection::create_pool(database_url).await?;
    connection::ping(&pool).await?;

    let store = PostgresZoneStore::new(pool);
    store.ensure_schema().await?;
    store.seed_if_empty().await?;

    Ok(store)
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
