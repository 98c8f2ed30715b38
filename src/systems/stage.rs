//! Stage transition system.
//!
//! Each frame only the transition leaving the *current* stage is checked, so
//! at most one stage change happens per frame and no stage is skipped.
//! Thresholds compare against the absolute `WorldTime::elapsed`.
//!
//! # Side effects of a transition
//!
//! - the stage in [`SceneStage`] moves forward
//! - on `Normal -> FireStart` the burning window is drawn from [`SceneRng`]
//! - the transition's announcement is appended to the [`EventLog`]
//! - a [`StageChangedEvent`] is triggered; observers handle sound cues

use bevy_ecs::prelude::*;
use log::warn;

use crate::components::firetruck::FireTruck;
use crate::components::humangroup::HumanGroup;
use crate::components::mapposition::MapPosition;
use crate::events::stage::StageChangedEvent;
use crate::resources::eventlog::EventLog;
use crate::resources::scenerng::SceneRng;
use crate::resources::skyline::Skyline;
use crate::resources::stage::{Prerequisite, SceneStage, SimulationStage};
use crate::resources::worldtime::WorldTime;

pub fn stage_transition_system(
    time: Res<WorldTime>,
    mut scene: ResMut<SceneStage>,
    mut log: ResMut<EventLog>,
    mut rng: ResMut<SceneRng>,
    skyline: Res<Skyline>,
    trucks: Query<&FireTruck>,
    humans: Query<(&MapPosition, &HumanGroup)>,
    mut commands: Commands,
) {
    let Some(transition) = scene.current().outgoing() else {
        return;
    };
    if time.elapsed <= transition.after {
        return;
    }
    let ready = match transition.requires {
        Prerequisite::None => true,
        Prerequisite::HumansInPlace => {
            !humans.is_empty() && humans.iter().all(|(pos, group)| group.in_place(pos.x))
        }
        Prerequisite::TrucksArrived => !trucks.is_empty() && trucks.iter().all(|t| t.arrived),
    };
    if !ready {
        return;
    }

    let Some(from) = scene.advance_to(transition.to) else {
        return;
    };
    if transition.to == SimulationStage::FireStart {
        let window = rng.index(skyline.burnable_windows());
        if !scene.ignite(window) {
            warn!("Fire already burning in window {:?}", scene.burning_window());
        }
    }
    log.push(transition.announcement);
    commands.trigger(StageChangedEvent {
        from,
        to: transition.to,
    });
}
