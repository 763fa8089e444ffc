//! DTOs de la API
//!
//! Requests y responses serializables, separados de los modelos de dominio.

pub mod geofence_dto;
pub mod route_dto;
pub mod tracking_dto;
pub mod zone_dto;

pub use geofence_dto::*;
pub use route_dto::*;
pub use tracking_dto::*;
pub use zone_dto::*;
