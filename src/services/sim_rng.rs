//! Generador de números aleatorios determinista para la simulación
//!
//! Envuelve `ChaCha8Rng` para obtener aleatoriedad reproducible entre
//! plataformas. Todo el código de simulación debe usar `SimRng` en vez
//! de `rand::thread_rng()` para que la misma semilla produzca la misma
//! flota y el mismo catálogo.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Semilla por defecto cuando no se configura una explícita
const DEFAULT_SEED: u64 = 42;

/// RNG determinista para toda la aleatoriedad de la simulación
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Crea un `SimRng` con la semilla indicada
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Crea un `SimRng` con semilla tomada del sistema operativo
    pub fn from_entropy() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}
