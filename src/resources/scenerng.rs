//! Seeded random source shared by the stage and particle engines.

use bevy_ecs::prelude::Resource;
use fastrand::Rng;

#[derive(Resource, Debug, Clone)]
pub struct SceneRng {
    seed: u64,
    rng: Rng,
}

impl SceneRng {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Rng::with_seed(seed),
        }
    }

    /// Pick a fresh seed from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::with_seed(fastrand::u64(..))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.usize(0..len)
    }

    /// Uniform value in `[min, max)`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.rng.f32() * (max - min)
    }
}
