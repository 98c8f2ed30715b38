//! Fire truck component.
//!
//! A truck drives in from the left edge to a parking spot in front of the
//! main building, sprays while the fire is being extinguished, then drives
//! off to the right forever. Movement is handled by
//! [`crate::systems::trucks::truck_update_system`].
//!
//! # Lifecycle
//!
//! 1. `FirefightersArrive`: step toward `target_x`, clamped; `arrived` once reached
//! 2. `Extinguishing`: arrived trucks start spraying
//! 3. `TrucksLeaving`: spraying stops, `leaving` is set and never cleared

use bevy_ecs::prelude::*;
use serde::Serialize;

/// Per-frame distance while approaching the building.
pub const APPROACH_STEP: f32 = 0.8;
/// Per-frame distance while leaving the scene.
pub const LEAVE_STEP: f32 = 1.5;

/// When a truck may start driving in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TruckApproach {
    /// Drive as soon as firefighters are dispatched.
    Immediate,
    /// Wait until `leader` has driven past `past_x`, so the two trucks do not
    /// overlap on the road.
    After { leader: Entity, past_x: f32 },
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct FireTruck {
    /// Parking spot on the road.
    pub target_x: f32,
    pub approach: TruckApproach,
    pub arrived: bool,
    pub spraying: bool,
    pub leaving: bool,
}

impl FireTruck {
    pub fn new(target_x: f32) -> Self {
        Self {
            target_x,
            approach: TruckApproach::Immediate,
            arrived: false,
            spraying: false,
            leaving: false,
        }
    }

    /// Builder: hold back until `leader` is past `past_x`.
    pub fn following(mut self, leader: Entity, past_x: f32) -> Self {
        self.approach = TruckApproach::After { leader, past_x };
        self
    }

    /// Sort key putting leaders before the trucks that wait on them.
    pub fn update_order(&self) -> u8 {
        match self.approach {
            TruckApproach::Immediate => 0,
            TruckApproach::After { .. } => 1,
        }
    }
}

/// Read-only view of a truck handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TruckState {
    pub x: f32,
    pub arrived: bool,
    pub spraying: bool,
    pub leaving: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_truck_is_idle() {
        let truck = FireTruck::new(200.0);
        assert_eq!(truck.approach, TruckApproach::Immediate);
        assert!(!truck.arrived && !truck.spraying && !truck.leaving);
    }

    #[test]
    fn follower_updates_after_leader() {
        let mut world = World::new();
        let leader = world.spawn_empty().id();
        let lead = FireTruck::new(200.0);
        let follow = FireTruck::new(250.0).following(leader, 150.0);
        assert!(lead.update_order() < follow.update_order());
        assert_eq!(
            follow.approach,
            TruckApproach::After {
                leader,
                past_x: 150.0
            }
        );
    }
}
