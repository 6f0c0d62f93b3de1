//! Deterministic game RNG resource.
//!
//! Wraps `ChaCha8Rng` for cross-platform deterministic randomness.
//! Lane generation never touches `rand::thread_rng()`: everything goes
//! through the [`RandomSource`] trait so that identical seeds produce
//! identical worlds and tests can substitute scripted sources.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// The two primitives the lane generators draw from.
pub trait RandomSource {
    /// Returns `true` with probability `1 / odds`.
    fn random_bool(&mut self, odds: u32) -> bool;

    /// Uniform index in `0..len`.
    fn random_index(&mut self, len: usize) -> usize;
}

/// Deterministic RNG resource for all gameplay randomness.
///
/// Systems that need randomness take `ResMut<SimRng>` and pass it to the
/// generators as a `&mut dyn RandomSource`, or use `rng.0` directly.
#[derive(Resource)]
pub struct SimRng(pub ChaCha8Rng);

impl Default for SimRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl SimRng {
    /// Create a new `SimRng` seeded from the given `u64` value.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SimRng {
    fn random_bool(&mut self, odds: u32) -> bool {
        debug_assert!(odds > 0, "random_bool odds must be positive");
        self.0.gen_range(0..odds.max(1)) == 0
    }

    fn random_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "random_index needs a non-empty range");
        self.0.gen_range(0..len.max(1))
    }
}

pub struct SimRngPlugin;

impl Plugin for SimRngPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimRng>();
    }
}
