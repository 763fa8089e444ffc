//! Abstracción de almacenamiento de zonas
//!
//! Dos implementaciones seleccionadas al arranque y nunca mezcladas en
//! runtime: Postgres cuando hay DATABASE_URL y la conexión funciona,
//! o el catálogo en memoria como fallback.

use crate::models::zone::{StorageSource, Zone};
use crate::utils::errors::AppResult;

#[async_trait::async_trait]
pub trait ZoneStore: Send + Sync {
    /// Backend activo, expuesto como indicador `source` en las respuestas
    fn source(&self) -> StorageSource;

    /// Todas las zonas en orden de catálogo
    async fn list(&self) -> AppResult<Vec<Zone>>;

    async fn get(&self, zone_id: &str) -> AppResult<Option<Zone>>;

    /// Registra el voto y aplica el incremento del score de forma
    /// atómica respecto a otros votos sobre la misma zona. El valor ya
    /// viene validado por el servicio. Devuelve `None` si la zona no
    /// existe (sin registrar el voto).
    async fn submit_vote(
        &self,
        zone_id: &str,
        voter_id: &str,
        value: i32,
    ) -> AppResult<Option<Zone>>;
}
