//! Flame and smoke particle component.
//!
//! Particles are spawned in batches at the burning window and die when
//! `life` runs out; see [`crate::systems::particles`].

use bevy_ecs::prelude::Component;
use serde::Serialize;

#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FireParticle {
    /// Vertical speed factor, in `[0.5, 1.5)` at spawn.
    pub velocity: f32,
    /// Remaining life; the particle is dead at `<= 0`.
    pub life: f32,
    /// Point size when drawn.
    pub size: f32,
    /// Window of the main building that emitted it.
    pub window: usize,
}

impl FireParticle {
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Flame colour by remaining life: orange, then yellow-orange, then grey
    /// smoke fading out. Returns RGBA.
    pub fn rgba(&self) -> (u8, u8, u8, u8) {
        let alpha = |a: f32| (a.clamp(0.0, 1.0) * 255.0) as u8;
        if self.life > 0.7 {
            (255, 77, 0, alpha(0.8))
        } else if self.life > 0.3 {
            (255, 153, 0, alpha(self.life))
        } else {
            (77, 77, 77, alpha(self.life * 0.5))
        }
    }
}
