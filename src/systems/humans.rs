use bevy_ecs::prelude::*;

use crate::components::humangroup::{HumanGroup, WALK_STEP};
use crate::components::mapposition::MapPosition;
use crate::resources::pacing::ActorPacing;
use crate::resources::stage::SceneStage;
use crate::resources::worldtime::WorldTime;

/// Walk the crew left toward the building while it is arriving, stopping at
/// the group's `stop_x`.
pub fn human_update_system(
    mut query: Query<(&mut MapPosition, &HumanGroup)>,
    scene: Res<SceneStage>,
    time: Res<WorldTime>,
    pacing: Res<ActorPacing>,
) {
    if !scene.current().humans_walking() {
        return;
    }
    let step = pacing.step(WALK_STEP, time.delta);
    for (mut pos, group) in query.iter_mut() {
        pos.x = (pos.x - step).max(group.stop_x);
    }
}
