//! Blink state of the alarm light on the main building.

use bevy_ecs::prelude::Resource;

/// Advance per frame; the light toggles once the timer exceeds `BLINK_AFTER`.
pub const BLINK_STEP: f32 = 0.1;
pub const BLINK_AFTER: f32 = 0.5;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AlarmBeacon {
    pub lit: bool,
    pub timer: f32,
}

impl AlarmBeacon {
    pub fn tick(&mut self) {
        self.timer += BLINK_STEP;
        if self.timer > BLINK_AFTER {
            self.lit = !self.lit;
            self.timer = 0.0;
        }
    }
}
