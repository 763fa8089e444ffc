//! Transit Tracking - Geospatial Simulation & Zoning API
//!
//! Backend de información de transporte público: catálogo determinista
//! de rutas, simulación de flota por ticks, zonas de seguridad votadas
//! por la comunidad y chequeos de geofencing.

pub mod config;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
