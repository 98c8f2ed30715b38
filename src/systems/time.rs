//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame, applying `time_scale` to the provided delta.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the unscaled frame delta in seconds as reported by the clock.
/// Negative or non-finite deltas (clock hiccups, first-frame sentinels) are
/// treated as zero so `elapsed` never goes backwards.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    let scaled_dt = dt * wt.time_scale.max(0.0);
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
