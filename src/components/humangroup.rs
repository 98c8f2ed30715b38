//! The small crew of humans walking in from the right edge.
//!
//! The group is a single entity; its [`MapPosition`](crate::components::mapposition::MapPosition)
//! `x` is the position of the first human and the others follow at `spacing`.

use bevy_ecs::prelude::Component;

/// Per-frame walking distance.
pub const WALK_STEP: f32 = 0.5;

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct HumanGroup {
    /// Where the group stops walking.
    pub stop_x: f32,
    pub members: u8,
    pub spacing: f32,
}

impl Default for HumanGroup {
    fn default() -> Self {
        Self {
            stop_x: 350.0,
            members: 3,
            spacing: 30.0,
        }
    }
}

impl HumanGroup {
    pub fn in_place(&self, x: f32) -> bool {
        x <= self.stop_x
    }
}
