//! Stage transition event and its observers.
//!
//! [`crate::systems::stage::stage_transition_system`] triggers a
//! [`StageChangedEvent`] every time the scene moves to the next stage. The
//! observers here react to it:
//! - [`stage_audio_observer`] applies the sound cue actions of the transition
//! - [`stage_logging_observer`] reports the transition through `log`
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::events::audio::AudioCmd;
use crate::resources::soundboard::SoundBoard;
use crate::resources::stage::{CueAction, SimulationStage};
use crate::resources::worldtime::WorldTime;

/// The scene moved from `from` to `to` this frame.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageChangedEvent {
    pub from: SimulationStage,
    pub to: SimulationStage,
}

/// Start and stop sound cues for the stage that was just entered.
///
/// Commands go through [`SoundBoard`], so a cue that is already playing (or
/// whose file is missing) does not produce a second [`AudioCmd`].
pub fn stage_audio_observer(
    trigger: On<StageChangedEvent>,
    mut sounds: ResMut<SoundBoard>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    let Some(transition) = event.to.incoming() else {
        return;
    };
    for action in transition.cues {
        let cmd = match *action {
            CueAction::Start(cue) => sounds.start(cue),
            CueAction::Stop(cue) => sounds.stop(cue),
        };
        match cmd {
            Some(cmd) => {
                debug!("Stage {} sends {:?}", event.to, cmd);
                audio_cmds.write(cmd);
            }
            None => debug!("Stage {}: {:?} needs no command", event.to, action),
        }
    }
}

pub fn stage_logging_observer(trigger: On<StageChangedEvent>, time: Res<WorldTime>) {
    let event = trigger.event();
    info!(
        "Stage {} -> {} at t={:.2}s (frame {})",
        event.from, event.to, time.elapsed, time.frame_count
    );
}
