//! Almacenamiento de zonas en PostgreSQL
//!
//! Dos tablas: `zones` (score agregado por zona) y `votes` (registro
//! append-only). El incremento del score se hace en un solo UPDATE
//! para que votos concurrentes sobre la misma zona no se pierdan.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::zone::{StorageSource, Zone, ZoneBounds};
use crate::repositories::zone_store::ZoneStore;
use crate::services::seed_data::DELHI_ZONES;
use crate::utils::errors::{AppError, AppResult};

const ZONE_COLUMNS: &str = "id, name, lat_min, lat_max, lng_min, lng_max, score, vote_count";

#[derive(sqlx::FromRow)]
struct ZoneRow {
    id: String,
    name: String,
    lat_min: f64,
    lat_max: f64,
    lng_min: f64,
    lng_max: f64,
    score: i32,
    vote_count: i64,
}

impl From<ZoneRow> for Zone {
    fn from(row: ZoneRow) -> Self {
        Zone {
            id: row.id,
            name: row.name,
            bounds: ZoneBounds {
                lat_min: row.lat_min,
                lat_max: row.lat_max,
                lng_min: row.lng_min,
                lng_max: row.lng_max,
            },
            score: row.score,
            vote_count: row.vote_count,
        }
    }
}

pub struct PostgresZoneStore {
    pool: PgPool,
}

impl PostgresZoneStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crea las tablas si no existen
    pub async fn ensure_schema(&self) -> AppResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS zones (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                lat_min DOUBLE PRECISION NOT NULL,
                lat_max DOUBLE PRECISION NOT NULL,
                lng_min DOUBLE PRECISION NOT NULL,
                lng_max DOUBLE PRECISION NOT NULL,
                score INTEGER NOT NULL DEFAULT 0,
                vote_count BIGINT NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating zones table: {}", e)))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS votes (
                id UUID PRIMARY KEY,
                zone_id TEXT NOT NULL REFERENCES zones(id),
                voter_id TEXT NOT NULL,
                value INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error creating votes table: {}", e)))?;

        Ok(())
    }

    /// Inserta el catálogo de Delhi cuando la tabla está vacía.
    /// Devuelve la cantidad de zonas insertadas.
    pub async fn seed_if_empty(&self) -> AppResult<usize> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM zones")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error counting zones: {}", e)))?;

        if count > 0 {
            return Ok(0);
        }

        for zone in DELHI_ZONES.iter() {
            sqlx::query(
                r#"
                INSERT INTO zones (id, name, lat_min, lat_max, lng_min, lng_max, score, vote_count)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                "#,
            )
            .bind(&zone.id)
            .bind(&zone.name)
            .bind(zone.bounds.lat_min)
            .bind(zone.bounds.lat_max)
            .bind(zone.bounds.lng_min)
            .bind(zone.bounds.lng_max)
            .bind(zone.score)
            .bind(zone.vote_count)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error seeding zone {}: {}", zone.id, e)))?;
        }

        log::info!("💾 Seeded {} zones into Postgres", DELHI_ZONES.len());
        Ok(DELHI_ZONES.len())
    }
}

#[async_trait::async_trait]
impl ZoneStore for PostgresZoneStore {
    fn source(&self) -> StorageSource {
        StorageSource::Postgres
    }

    async fn list(&self) -> AppResult<Vec<Zone>> {
        let rows = sqlx::query_as::<_, ZoneRow>(&format!(
            "SELECT {} FROM zones ORDER BY id",
            ZONE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error listing zones: {}", e)))?;

        Ok(rows.into_iter().map(Zone::from).collect())
    }

    async fn get(&self, zone_id: &str) -> AppResult<Option<Zone>> {
        let row = sqlx::query_as::<_, ZoneRow>(&format!(
            "SELECT {} FROM zones WHERE id = $1",
            ZONE_COLUMNS
        ))
        .bind(zone_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error finding zone: {}", e)))?;

        Ok(row.map(Zone::from))
    }

    async fn submit_vote(
        &self,
        zone_id: &str,
        voter_id: &str,
        value: i32,
    ) -> AppResult<Option<Zone>> {
        let exists: Option<String> = sqlx::query_scalar("SELECT id FROM zones WHERE id = $1")
            .bind(zone_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::Database(format!("Error checking zone: {}", e)))?;

        if exists.is_none() {
            return Ok(None);
        }

        sqlx::query(
            r#"
            INSERT INTO votes (id, zone_id, voter_id, value, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(zone_id)
        .bind(voter_id)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error recording vote: {}", e)))?;

        // Incremento en un solo statement: el score nunca pierde votos
        // concurrentes sobre la misma zona
        let row = sqlx::query_as::<_, ZoneRow>(&format!(
            r#"
            UPDATE zones
            SET score = score + $2, vote_count = vote_count + 1
            WHERE id = $1
            RETURNING {}
            "#,
            ZONE_COLUMNS
        ))
        .bind(zone_id)
        .bind(value)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::Database(format!("Error updating zone score: {}", e)))?;

        Ok(Some(Zone::from(row)))
    }
}
