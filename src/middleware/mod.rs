//! Middleware del sistema
//!
//! Este módulo contiene el middleware para autenticación de votantes y CORS.

pub mod auth;
pub mod cors;

pub use auth::*;
pub use cors::*;
