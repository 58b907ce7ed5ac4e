//! Deterministic RNG derivation.
//!
//! A master seed is expanded into per-(label, iteration) sub-seeds via
//! BLAKE3 hashing. Because derivation is hash-based rather than
//! order-dependent, the same master seed produces identical sub-seeds
//! regardless of the order iterations are processed in — which is what
//! lets the Monte Carlo simulator run its trials on a parallel iterator
//! and still be reproducible.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Master-seed wrapper that hands out per-iteration RNGs.
#[derive(Debug, Clone, Copy)]
pub struct SeedDomain {
    master_seed: u64,
}

impl SeedDomain {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Derive a deterministic sub-seed for a (label, iteration) pair.
    pub fn sub_seed(&self, label: &str, iteration: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(label.as_bytes());
        hasher.update(&iteration.to_le_bytes());
        let hash = hasher.finalize();
        u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
    }

    /// Create a seeded StdRng for a (label, iteration) pair.
    pub fn rng_for(&self, label: &str, iteration: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(label, iteration))
    }
}
