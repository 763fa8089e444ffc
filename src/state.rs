//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. El catálogo de rutas y el catálogo de
//! geofencing son de solo lectura; la flota vive detrás de un RwLock
//! porque cada tick muta todos los vehículos.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::ZoneStore;
use crate::services::{FleetSimulator, GeofenceService, RouteCatalog, SimRng, ZoneService};
use crate::utils::errors::AppResult;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub catalog: Arc<RouteCatalog>,
    pub fleet: Arc<RwLock<FleetSimulator>>,
    pub zones: Arc<ZoneService>,
    pub geofence: Arc<GeofenceService>,
}

impl AppState {
    /// Construye el estado completo: genera el catálogo de rutas,
    /// inicializa la flota y envuelve el store de zonas elegido.
    pub fn build(config: EnvironmentConfig, zone_store: Arc<dyn ZoneStore>) -> AppResult<Self> {
        let mut rng = match config.sim_seed {
            Some(seed) => {
                log::info!("🔍 Using fixed simulation seed: {}", seed);
                SimRng::from_seed_u64(seed)
            }
            None => SimRng::from_entropy(),
        };

        let catalog = Arc::new(RouteCatalog::generate(&mut rng)?);
        let fleet = FleetSimulator::initialize(Arc::clone(&catalog), rng);

        Ok(Self {
            config,
            catalog,
            fleet: Arc::new(RwLock::new(fleet)),
            zones: Arc::new(ZoneService::new(zone_store)),
            geofence: Arc::new(GeofenceService::new()),
        })
    }
}
