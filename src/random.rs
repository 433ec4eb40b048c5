//! Constructors for the random sources used in production and tests

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Reproducible source: the same seed always yields the same sequence
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Source seeded from system entropy
pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Seeded when a seed is given, entropy otherwise
pub fn from_optional_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(from_entropy, seeded)
}
