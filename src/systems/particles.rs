//! Fire particle system.
//!
//! Runs only while the fire burns (see [`fire_is_burning`]). Each invocation:
//!
//! 1. despawns particles whose life is used up
//! 2. moves the survivors and ages them by `0.5 * dt`
//! 3. spawns [`PARTICLES_PER_FRAME`] new particles at the burning window
//!
//! There is no cap on the number of live particles.

use bevy_ecs::prelude::*;

use crate::components::fireparticle::FireParticle;
use crate::components::mapposition::MapPosition;
use crate::resources::scenerng::SceneRng;
use crate::resources::skyline::Skyline;
use crate::resources::stage::SceneStage;
use crate::resources::worldtime::WorldTime;

pub const PARTICLES_PER_FRAME: usize = 5;
/// Converts per-second particle speeds to scene units.
const MOTION_SCALE: f32 = 50.0;
const DRIFT: f32 = 0.5;
const DECAY_PER_SECOND: f32 = 0.5;

/// Run condition: a window is burning and the stage shows fire.
pub fn fire_is_burning(scene: Res<SceneStage>) -> bool {
    scene.fire_burning()
}

pub fn fire_particle_system(
    mut query: Query<(Entity, &mut MapPosition, &mut FireParticle)>,
    scene: Res<SceneStage>,
    skyline: Res<Skyline>,
    time: Res<WorldTime>,
    mut rng: ResMut<SceneRng>,
    mut commands: Commands,
) {
    let dt = time.delta;
    for (entity, mut pos, mut particle) in query.iter_mut() {
        if particle.is_dead() {
            commands.entity(entity).despawn();
            continue;
        }
        pos.y += particle.velocity * dt * MOTION_SCALE;
        pos.x += (time.elapsed * 2.0 + pos.x).sin() * DRIFT * dt * MOTION_SCALE;
        particle.life -= DECAY_PER_SECOND * dt;
    }

    let Some(window) = scene.burning_window() else {
        return;
    };
    let (anchor_x, anchor_y) = skyline.fire_anchor(window);
    for _ in 0..PARTICLES_PER_FRAME {
        let x = anchor_x + rng.range(-2.5, 2.5);
        let y = anchor_y + rng.range(0.0, 5.0);
        commands.spawn((
            MapPosition::new(x, y),
            FireParticle {
                velocity: rng.range(0.5, 1.5),
                life: rng.range(0.5, 1.0),
                size: rng.range(2.0, 4.0),
                window,
            },
        ));
    }
}
