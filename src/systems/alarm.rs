use bevy_ecs::prelude::*;

use crate::resources::alarmbeacon::AlarmBeacon;
use crate::resources::stage::SceneStage;

/// Step the alarm light's blink timer once per frame while the alarm sounds.
pub fn alarm_beacon_system(scene: Res<SceneStage>, mut beacon: ResMut<AlarmBeacon>) {
    if scene.current().alarm_active() {
        beacon.tick();
    }
}
