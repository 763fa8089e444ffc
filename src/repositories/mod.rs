//! Repositorios de acceso a datos
//!
//! Este módulo contiene la abstracción de almacenamiento de zonas y
//! sus dos implementaciones (Postgres y memoria).

pub mod zone_store;
pub mod postgres_zones;
pub mod memory_zones;

pub use zone_store::ZoneStore;
pub use postgres_zones::PostgresZoneStore;
pub use memory_zones::InMemoryZoneStore;
