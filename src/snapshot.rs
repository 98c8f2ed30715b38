//! Read-only copy of the scene handed to the renderer and to headless output.
//!
//! Capturing needs `&mut World` only to build queries; nothing in the world is
//! modified.

use bevy_ecs::prelude::*;
use serde::Serialize;

use crate::components::fireparticle::FireParticle;
use crate::components::firetruck::{FireTruck, TruckState};
use crate::components::humangroup::HumanGroup;
use crate::components::mapposition::MapPosition;
use crate::resources::alarmbeacon::AlarmBeacon;
use crate::resources::eventlog::EventLog;
use crate::resources::scenerng::SceneRng;
use crate::resources::skyline::Skyline;
use crate::resources::soundboard::{SoundBoard, SoundCue};
use crate::resources::stage::{SceneStage, SimulationStage};
use crate::resources::worldtime::WorldTime;

/// Entries of the event log shown in the HUD.
pub const HUD_LOG_LINES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrewState {
    pub x: f32,
    pub y: f32,
    pub members: u8,
    pub spacing: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleState {
    pub x: f32,
    pub y: f32,
    pub life: f32,
    pub size: f32,
    pub rgba: (u8, u8, u8, u8),
}

#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub stage: SimulationStage,
    pub status: &'static str,
    pub elapsed: f32,
    pub frame: u64,
    pub seed: Option<u64>,
    pub burning_window: Option<usize>,
    /// Leader first.
    pub trucks: Vec<TruckState>,
    pub crew: Option<CrewState>,
    pub particle_count: usize,
    #[serde(skip)]
    pub particles: Vec<ParticleState>,
    pub recent_events: Vec<String>,
    pub alarm_lit: bool,
    pub cues_playing: Vec<SoundCue>,
    #[serde(skip)]
    pub skyline: Skyline,
}

impl SceneSnapshot {
    pub fn capture(world: &mut World) -> Self {
        let (stage, burning_window) = {
            let scene = world.resource::<SceneStage>();
            (scene.current(), scene.burning_window())
        };
        let time = *world.resource::<WorldTime>();

        let mut trucks: Vec<(u8, TruckState)> = world
            .query::<(&MapPosition, &FireTruck)>()
            .iter(world)
            .map(|(pos, truck)| {
                (
                    truck.update_order(),
                    TruckState {
                        x: pos.x,
                        arrived: truck.arrived,
                        spraying: truck.spraying,
                        leaving: truck.leaving,
                    },
                )
            })
            .collect();
        trucks.sort_by_key(|(order, _)| *order);

        let crew = world
            .query::<(&MapPosition, &HumanGroup)>()
            .iter(world)
            .next()
            .map(|(pos, group)| CrewState {
                x: pos.x,
                y: pos.y,
                members: group.members,
                spacing: group.spacing,
            });

        let particles: Vec<ParticleState> = world
            .query::<(&MapPosition, &FireParticle)>()
            .iter(world)
            .map(|(pos, p)| ParticleState {
                x: pos.x,
                y: pos.y,
                life: p.life,
                size: p.size,
                rgba: p.rgba(),
            })
            .collect();

        let recent_events = world
            .get_resource::<EventLog>()
            .map(|log| log.latest(HUD_LOG_LINES).to_vec())
            .unwrap_or_default();

        Self {
            stage,
            status: stage.status_text(),
            elapsed: time.elapsed,
            frame: time.frame_count,
            seed: world.get_resource::<SceneRng>().map(SceneRng::seed),
            burning_window,
            trucks: trucks.into_iter().map(|(_, t)| t).collect(),
            crew,
            particle_count: particles.len(),
            particles,
            recent_events,
            alarm_lit: world
                .get_resource::<AlarmBeacon>()
                .is_some_and(|beacon| beacon.lit),
            cues_playing: world
                .get_resource::<SoundBoard>()
                .map(SoundBoard::playing_cues)
                .unwrap_or_default(),
            skyline: world.get_resource::<Skyline>().cloned().unwrap_or_default(),
        }
    }

    /// Burning window rectangle centre, where spraying trucks aim the hose.
    ///
    /// Not gated on the fire stage: trucks keep spraying through `AllClear`.
    pub fn fire_target(&self) -> Option<(f32, f32)> {
        self.burning_window.map(|w| self.skyline.fire_anchor(w))
    }
}
