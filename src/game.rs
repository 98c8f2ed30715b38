//! Scene assembly: resources, actors, observers and the per-frame schedule.
//!
//! Both the windowed loop in `main` and headless runs (and the integration
//! tests) build the scene through [`setup_scene`] and advance it with
//! [`advance_frame`], so they run exactly the same update pipeline.

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::firetruck::FireTruck;
use crate::components::humangroup::HumanGroup;
use crate::components::mapposition::MapPosition;
use crate::events::stage::{stage_audio_observer, stage_logging_observer};
use crate::resources::alarmbeacon::AlarmBeacon;
use crate::resources::eventlog::EventLog;
use crate::resources::gameconfig::GameConfig;
use crate::resources::scenerng::SceneRng;
use crate::resources::skyline::Skyline;
use crate::resources::stage::SceneStage;
use crate::resources::worldtime::WorldTime;
use crate::systems::alarm::alarm_beacon_system;
use crate::systems::audio::{
    apply_audio_messages, forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::humans::human_update_system;
use crate::systems::particles::{fire_is_burning, fire_particle_system};
use crate::systems::stage::stage_transition_system;
use crate::systems::time::update_world_time;
use crate::systems::trucks::truck_update_system;

/// Starting x of the first truck, off-screen left.
pub const LEAD_TRUCK_START_X: f32 = -100.0;
pub const LEAD_TRUCK_TARGET_X: f32 = 200.0;
pub const SECOND_TRUCK_START_X: f32 = -150.0;
pub const SECOND_TRUCK_TARGET_X: f32 = 250.0;
/// The second truck waits until the first one is past this x.
pub const SECOND_TRUCK_WAITS_UNTIL_X: f32 = 150.0;
pub const CREW_START: (f32, f32) = (800.0, 380.0);

/// Where `AudioCmd` messages end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioWiring {
    /// Forward to the audio thread behind [`AudioBridge`](crate::resources::audio::AudioBridge).
    Bridge,
    /// No audio thread; messages are only cycled.
    Detached,
}

/// Entities spawned by [`spawn_actors`].
#[derive(Debug, Clone, Copy)]
pub struct SceneActors {
    pub lead_truck: Entity,
    pub second_truck: Entity,
    pub crew: Entity,
}

/// Insert every scene resource, spawn the actors and register the observers.
///
/// The audio message queues must already exist (see
/// [`setup_audio`](crate::resources::audio::setup_audio) and
/// [`init_audio_messages`](crate::resources::audio::init_audio_messages)).
pub fn setup_scene(world: &mut World, config: &GameConfig) -> SceneActors {
    let rng = match config.seed {
        Some(seed) => SceneRng::with_seed(seed),
        None => SceneRng::from_entropy(),
    };
    info!("Scene seed: {}", rng.seed());

    let sounds = config.sound_board();
    if !sounds.is_muted() {
        sounds.verify_assets();
    }

    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    world.insert_resource(SceneStage::new());
    world.insert_resource(EventLog::new());
    world.insert_resource(rng);
    world.insert_resource(Skyline::default());
    world.insert_resource(AlarmBeacon::default());
    world.insert_resource(config.actor_pacing);
    world.insert_resource(sounds);
    world.insert_resource(config.clone());

    world.spawn(Observer::new(stage_audio_observer));
    world.spawn(Observer::new(stage_logging_observer));
    world.flush();

    spawn_actors(world)
}

/// Spawn the two trucks off-screen left and the crew off-screen right.
pub fn spawn_actors(world: &mut World) -> SceneActors {
    let lead_truck = world
        .spawn((
            MapPosition::new(LEAD_TRUCK_START_X, 0.0),
            FireTruck::new(LEAD_TRUCK_TARGET_X),
        ))
        .id();
    let second_truck = world
        .spawn((
            MapPosition::new(SECOND_TRUCK_START_X, 0.0),
            FireTruck::new(SECOND_TRUCK_TARGET_X)
                .following(lead_truck, SECOND_TRUCK_WAITS_UNTIL_X),
        ))
        .id();
    let crew = world
        .spawn((
            MapPosition::new(CREW_START.0, CREW_START.1),
            HumanGroup::default(),
        ))
        .id();
    SceneActors {
        lead_truck,
        second_truck,
        crew,
    }
}

/// Per-frame pipeline: stage, actors, particles, alarm light, then audio.
pub fn build_update_schedule(wiring: AudioWiring) -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(
        (
            stage_transition_system,
            human_update_system,
            truck_update_system,
            fire_particle_system.run_if(fire_is_burning),
            alarm_beacon_system,
        )
            .chain(),
    );
    match wiring {
        AudioWiring::Bridge => {
            update.add_systems(
                // audio systems must be together
                (
                    update_bevy_audio_cmds,
                    forward_audio_cmds,
                    poll_audio_messages,
                    update_bevy_audio_messages,
                    apply_audio_messages,
                )
                    .chain()
                    .after(alarm_beacon_system),
            );
        }
        AudioWiring::Detached => {
            update.add_systems(
                (
                    update_bevy_audio_cmds,
                    update_bevy_audio_messages,
                    apply_audio_messages,
                )
                    .chain()
                    .after(alarm_beacon_system),
            );
        }
    }
    update
}

/// Advance the clock by `dt` seconds and run one frame of the schedule.
pub fn advance_frame(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}
