//! Almacenamiento de zonas en memoria
//!
//! Catálogo no durable usado cuando no hay base de datos configurada,
//! y como fallback de solo lectura cuando Postgres no responde al
//! arranque. En modo fallback los votos se rechazan en vez de
//! descartarse en silencio.

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::zone::{StorageSource, Vote, Zone};
use crate::repositories::zone_store::ZoneStore;
use crate::services::seed_data::DELHI_ZONES;
use crate::utils::errors::{AppError, AppResult};

pub struct InMemoryZoneStore {
    zones: RwLock<Vec<Zone>>,
    votes: RwLock<Vec<Vote>>,
    writable: bool,
}

impl InMemoryZoneStore {
    /// Catálogo de Delhi, con votación habilitada
    pub fn seeded() -> Self {
        Self::with_zones(DELHI_ZONES.clone())
    }

    /// Catálogo de Delhi en modo degradado: las lecturas funcionan,
    /// los votos devuelven StorageUnavailable
    pub fn read_only_fallback() -> Self {
        let mut store = Self::with_zones(DELHI_ZONES.clone());
        store.writable = false;
        store
    }

    pub fn with_zones(zones: Vec<Zone>) -> Self {
        Self {
            zones: RwLock::new(zones),
            votes: RwLock::new(Vec::new()),
            writable: true,
        }
    }

    /// Cantidad de votos registrados en el ledger
    pub async fn recorded_votes(&self) -> usize {
        self.votes.read().await.len()
    }
}

#[async_trait::async_trait]
impl ZoneStore for InMemoryZoneStore {
    fn source(&self) -> StorageSource {
        StorageSource::Memory
    }

    async fn list(&self) -> AppResult<Vec<Zone>> {
        Ok(self.zones.read().await.clone())
    }

    async fn get(&self, zone_id: &str) -> AppResult<Option<Zone>> {
        let zones = self.zones.read().await;
        Ok(zones.iter().find(|z| z.id == zone_id).cloned())
    }

    async fn submit_vote(
        &self,
        zone_id: &str,
        voter_id: &str,
        value: i32,
    ) -> AppResult<Option<Zone>> {
        if !self.writable {
            return Err(AppError::StorageUnavailable(
                "Zone storage is in read-only fallback mode; votes cannot be recorded".to_string(),
            ));
        }

        // El write lock sobre el catálogo serializa el read-modify-write
        // del score: dos votos concurrentes nunca pisan el incremento del otro
        let mut zones = self.zones.write().await;
        let Some(zone) = zones.iter_mut().find(|z| z.id == zone_id) else {
            return Ok(None);
        };

        self.votes.write().await.push(Vote {
            id: Uuid::new_v4(),
            zone_id: zone_id.to_string(),
            voter_id: voter_id.to_string(),
            value,
            created_at: Utc::now(),
        });

        zone.score += value;
        zone.vote_count += 1;

        Ok(Some(zone.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zone::ZoneBounds;
    use std::sync::Arc;

    fn beach_zone(score: i32) -> Zone {
        Zone {
            id: "beach_001".to_string(),
            name: "Beach Area".to_string(),
            bounds: ZoneBounds { lat_min: 12.9, lat_max: 13.0, lng_min: 74.8, lng_max: 74.9 },
            score,
            vote_count: 0,
        }
    }

    #[tokio::test]
    async fn test_seeded_store_lists_delhi_catalog() {
        let store = InMemoryZoneStore::seeded();
        let zones = store.list().await.unwrap();

        assert_eq!(zones.len(), 9);
        assert_eq!(zones[0].id, "delhi_001");
        assert_eq!(store.source(), StorageSource::Memory);
    }

    #[tokio::test]
    async fn test_submit_vote_updates_score_and_ledger() {
        let store = InMemoryZoneStore::with_zones(vec![beach_zone(0)]);

        let updated = store.submit_vote("beach_001", "voter_1", 1).await.unwrap().unwrap();
        assert_eq!(updated.score, 1);
        assert_eq!(updated.vote_count, 1);
        assert_eq!(store.recorded_votes().await, 1);
    }

    #[tokio::test]
    async fn test_vote_on_unknown_zone_appends_nothing() {
        let store = InMemoryZoneStore::with_zones(vec![beach_zone(0)]);

        let result = store.submit_vote("beach_999", "voter_1", 1).await.unwrap();
        assert!(result.is_none());
        assert_eq!(store.recorded_votes().await, 0);
    }

    #[tokio::test]
    async fn test_read_only_fallback_rejects_votes() {
        let store = InMemoryZoneStore::read_only_fallback();

        // Las lecturas siguen funcionando
        assert_eq!(store.list().await.unwrap().len(), 9);

        let err = store.submit_vote("delhi_001", "voter_1", 1).await.unwrap_err();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }

    #[tokio::test]
    async fn test_concurrent_votes_do_not_lose_updates() {
        let store = Arc::new(InMemoryZoneStore::with_zones(vec![beach_zone(3)]));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .submit_vote("beach_001", &format!("voter_{}", i), 1)
                        .await
                        .unwrap()
                        .unwrap()
                })
            })
            .collect();

        futures::future::join_all(handles).await;

        let zone = store.get("beach_001").await.unwrap().unwrap();
        assert_eq!(zone.score, 3 + 50);
        assert_eq!(zone.vote_count, 50);
        assert_eq!(store.recorded_votes().await, 50);
    }
}
