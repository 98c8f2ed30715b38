//! Fire truck movement.
//!
//! Trucks are processed leaders first, so a follower sees the position its
//! leader reached in the same frame.

use bevy_ecs::prelude::*;

use crate::components::firetruck::{APPROACH_STEP, FireTruck, LEAVE_STEP, TruckApproach};
use crate::components::mapposition::MapPosition;
use crate::resources::pacing::ActorPacing;
use crate::resources::stage::{SceneStage, SimulationStage};
use crate::resources::worldtime::WorldTime;

pub fn truck_update_system(
    mut query: Query<(Entity, &mut MapPosition, &mut FireTruck)>,
    scene: Res<SceneStage>,
    time: Res<WorldTime>,
    pacing: Res<ActorPacing>,
) {
    let stage = scene.current();
    let mut order: Vec<(u8, Entity)> = query
        .iter()
        .map(|(entity, _, truck)| (truck.update_order(), entity))
        .collect();
    order.sort();

    for (_, entity) in order {
        let may_approach = match query.get(entity) {
            Ok((_, _, truck)) => match truck.approach {
                TruckApproach::Immediate => true,
                TruckApproach::After { leader, past_x } => query
                    .get(leader)
                    .map(|(_, pos, _)| pos.x > past_x)
                    .unwrap_or(true),
            },
            Err(_) => continue,
        };
        let Ok((_, mut pos, mut truck)) = query.get_mut(entity) else {
            continue;
        };

        if stage == SimulationStage::FirefightersArrive && may_approach && !truck.arrived {
            pos.x = (pos.x + pacing.step(APPROACH_STEP, time.delta)).min(truck.target_x);
            if pos.x >= truck.target_x {
                truck.arrived = true;
            }
        } else if stage == SimulationStage::Extinguishing && truck.arrived {
            truck.spraying = true;
        } else if stage == SimulationStage::TrucksLeaving && !truck.leaving {
            truck.spraying = false;
            truck.leaving = true;
        }

        if truck.leaving {
            pos.x += pacing.step(LEAVE_STEP, time.delta);
        }
    }
}
