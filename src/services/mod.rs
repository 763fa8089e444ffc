//! Services module
//!
//! Este módulo contiene la lógica de negocio: generación del catálogo,
//! simulación de flota, zonas de votación y geofencing.

pub mod sim_rng;
pub mod seed_data;
pub mod network_generator;
pub mod route_catalog;
pub mod fleet_simulator;
pub mod zone_service;
pub mod geofence_service;

pub use sim_rng::SimRng;
pub use route_catalog::RouteCatalog;
pub use fleet_simulator::FleetSimulator;
pub use zone_service::ZoneService;
pub use geofence_service::GeofenceService;
