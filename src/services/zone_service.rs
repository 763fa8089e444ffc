//! Servicio de zonas de votación
//!
//! Orquesta el store de zonas: validación de votos, clasificación
//! derivada del score y lookup espacial por coordenada.

use std::sync::Arc;

use crate::models::zone::{StorageSource, Zone, ZoneColor, VoteOutcome};
use crate::repositories::ZoneStore;
use crate::utils::errors::{not_found_error, validation_error, AppError, AppResult};

pub struct ZoneService {
    store: Arc<dyn ZoneStore>,
}

impl ZoneService {
    pub fn new(store: Arc<dyn ZoneStore>) -> Self {
        Self { store }
    }

    pub fn source(&self) -> StorageSource {
        self.store.source()
    }

    pub async fn list_zones(&self) -> AppResult<Vec<Zone>> {
        self.store.list().await
    }

    pub async fn get_zone(&self, zone_id: &str) -> AppResult<Zone> {
        self.store
            .get(zone_id)
            .await?
            .ok_or_else(|| not_found_error("Zone", zone_id))
    }

    /// Registra un voto +1 (seguro) o -1 (peligro) sobre una zona.
    /// Un valor inválido se rechaza sin tocar el almacenamiento.
    pub async fn submit_vote(
        &self,
        zone_id: &str,
        voter_id: &str,
        value: i32,
    ) -> AppResult<VoteOutcome> {
        if value != 1 && value != -1 {
            return Err(validation_error("vote", "Vote must be +1 or -1"));
        }

        let updated = self
            .store
            .submit_vote(zone_id, voter_id, value)
            .await?
            .ok_or_else(|| not_found_error("Zone", zone_id))?;

        Ok(VoteOutcome {
            new_zone_color: ZoneColor::classify(updated.score),
            new_score: updated.score,
            zone_name: updated.name,
        })
    }

    /// Encuentra la zona que contiene la coordenada dada. Con zonas
    /// solapadas gana la primera en orden de catálogo.
    pub async fn locate_zone(&self, lat: f64, lng: f64) -> AppResult<Zone> {
        let zones = self.store.list().await?;

        zones
            .into_iter()
            .find(|z| z.bounds.contains(lat, lng))
            .ok_or_else(|| AppError::NotFound("No zone found at this location".to_string()))
    }
}
