//! Messages exchanged with the background audio thread.

use bevy_ecs::message::Message;

use crate::resources::soundboard::SoundCue;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Start looping `cue`, loading it from `path` on first use.
    PlayCue { cue: SoundCue, path: String },
    StopCue { cue: SoundCue },
    StopAll,
    Shutdown,
}

/// Messages sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    CueStarted { cue: SoundCue },
    CueRestarted { cue: SoundCue },
    CueStopped { cue: SoundCue },
    CueLoadFailed { cue: SoundCue, error: String },
    DeviceUnavailable { error: String },
}
