//! Benchmark profiles for Delve.
//!
//! - [`reference_profile`]: the classic 100x10 map with five rooms
//! - [`stress_profile`]: a 400x200 map with a few hundred rooms
//! - [`walk`]: a deterministic move sequence for session benchmarks

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use delve_core::Direction;
use delve_engine::WorldConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The classic 100x10 map with five rooms of side 5..=20.
pub fn reference_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        seed,
        ..WorldConfig::default()
    }
}

/// A 400x200 map (80K tiles) with up to 300 rooms of side 4..=24.
pub fn stress_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        width: 400,
        height: 200,
        room_count: 300,
        room_min_size: 4,
        room_max_size: 24,
        seed,
        max_generation_attempts: 8,
    }
}

/// `len` uniformly random moves, reproducible from `seed`.
pub fn walk(len: usize, seed: u64) -> Vec<Direction> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| Direction::ALL[rng.random_range(0..Direction::ALL.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        assert!(reference_profile(1).validate().is_ok());
        assert!(stress_profile(1).validate().is_ok());
    }

    #[test]
    fn walk_is_deterministic() {
        assert_eq!(walk(64, 3), walk(64, 3));
        assert_eq!(walk(64, 3).len(), 64);
    }
}
