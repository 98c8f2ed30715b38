//! Main-thread view of the three looping sound cues.
//!
//! The board decides *whether* a cue command is worth sending: starting a cue
//! that is already playing, or whose asset is missing, produces no command.
//! The audio thread only ever sees deduplicated requests.

use std::fmt;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use log::{info, warn};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::events::audio::AudioCmd;

/// Named sound cues of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SoundCue {
    Alarm,
    Truck,
    Water,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Alarm, SoundCue::Truck, SoundCue::Water];

    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Alarm => "alarm",
            SoundCue::Truck => "truck",
            SoundCue::Water => "water",
        }
    }
}

impl fmt::Display for SoundCue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Idempotent start/stop bookkeeping for the sound cues.
#[derive(Resource, Debug, Clone)]
pub struct SoundBoard {
    paths: FxHashMap<SoundCue, PathBuf>,
    playing: FxHashSet<SoundCue>,
    muted: bool,
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundBoard {
    /// Board with no assets registered; every start attempt is reported as missing.
    pub fn new() -> Self {
        Self {
            paths: FxHashMap::default(),
            playing: FxHashSet::default(),
            muted: false,
        }
    }

    /// Board that never produces commands.
    pub fn muted() -> Self {
        Self {
            muted: true,
            ..Self::new()
        }
    }

    pub fn with_path(mut self, cue: SoundCue, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(cue, path.into());
        self
    }

    pub fn path(&self, cue: SoundCue) -> Option<&Path> {
        self.paths.get(&cue).map(PathBuf::as_path)
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_playing(&self, cue: SoundCue) -> bool {
        self.playing.contains(&cue)
    }

    /// Cues currently playing, in [`SoundCue::ALL`] order.
    pub fn playing_cues(&self) -> Vec<SoundCue> {
        SoundCue::ALL
            .into_iter()
            .filter(|cue| self.playing.contains(cue))
            .collect()
    }

    /// Check every registered asset once and report the missing ones.
    pub fn verify_assets(&self) -> Vec<SoundCue> {
        let mut missing = Vec::new();
        for cue in SoundCue::ALL {
            match self.path(cue) {
                Some(path) if path.is_file() => {
                    info!("Sound cue '{}' found at {}", cue, path.display());
                }
                Some(path) => {
                    warn!("SOUND ERROR: file '{}' for cue '{}' not found", path.display(), cue);
                    missing.push(cue);
                }
                None => {
                    warn!("SOUND ERROR: no file configured for cue '{}'", cue);
                    missing.push(cue);
                }
            }
        }
        missing
    }

    /// Request that `cue` starts looping.
    ///
    /// Returns the command to forward, or `None` when the cue is already
    /// playing, the board is muted, or the asset cannot be found.
    pub fn start(&mut self, cue: SoundCue) -> Option<AudioCmd> {
        if self.muted || self.playing.contains(&cue) {
            return None;
        }
        let Some(path) = self.path(cue) else {
            warn!("SOUND ERROR: no file configured for cue '{}', skipping", cue);
            return None;
        };
        if !path.is_file() {
            warn!(
                "SOUND ERROR: file '{}' not found, cue '{}' stays silent",
                path.display(),
                cue
            );
            return None;
        }
        let path = path.to_string_lossy().into_owned();
        self.playing.insert(cue);
        Some(AudioCmd::PlayCue { cue, path })
    }

    /// Request that `cue` stops. Returns `None` if it was not playing.
    pub fn stop(&mut self, cue: SoundCue) -> Option<AudioCmd> {
        if self.playing.remove(&cue) {
            Some(AudioCmd::StopCue { cue })
        } else {
            None
        }
    }

    /// Forget a cue without emitting a command (the audio thread already dropped it).
    pub fn mark_stopped(&mut self, cue: SoundCue) {
        self.playing.remove(&cue);
    }

    /// Stop tracking everything and refuse further starts.
    pub fn silence(&mut self) {
        self.playing.clear();
        self.muted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_asset(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "firescene-soundboard-{}-{}.wav",
            std::process::id(),
            name
        ));
        std::fs::write(&path, b"RIFF").unwrap();
        path
    }

    #[test]
    fn start_twice_emits_one_command() {
        let path = temp_asset("twice");
        let mut board = SoundBoard::new().with_path(SoundCue::Alarm, &path);

        let first = board.start(SoundCue::Alarm);
        let second = board.start(SoundCue::Alarm);

        assert!(matches!(first, Some(AudioCmd::PlayCue { cue: SoundCue::Alarm, .. })));
        assert_eq!(second, None);
        assert!(board.is_playing(SoundCue::Alarm));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn stop_is_idempotent() {
        let path = temp_asset("stop");
        let mut board = SoundBoard::new().with_path(SoundCue::Water, &path);
        board.start(SoundCue::Water);

        assert_eq!(
            board.stop(SoundCue::Water),
            Some(AudioCmd::StopCue { cue: SoundCue::Water })
        );
        assert_eq!(board.stop(SoundCue::Water), None);
        assert!(!board.is_playing(SoundCue::Water));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_asset_is_skipped_and_retried() {
        let path = std::env::temp_dir().join(format!(
            "firescene-soundboard-{}-absent.wav",
            std::process::id()
        ));
        std::fs::remove_file(&path).ok();
        let mut board = SoundBoard::new().with_path(SoundCue::Truck, &path);

        assert_eq!(board.start(SoundCue::Truck), None);
        assert!(!board.is_playing(SoundCue::Truck));

        std::fs::write(&path, b"RIFF").unwrap();
        assert!(board.start(SoundCue::Truck).is_some());
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn muted_board_never_plays() {
        let path = temp_asset("muted");
        let mut board = SoundBoard::muted().with_path(SoundCue::Alarm, &path);
        assert_eq!(board.start(SoundCue::Alarm), None);
        assert_eq!(board.stop(SoundCue::Alarm), None);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn verify_assets_reports_unconfigured_cues() {
        let path = temp_asset("verify");
        let board = SoundBoard::new().with_path(SoundCue::Alarm, &path);
        let missing = board.verify_assets();
        assert_eq!(missing, vec![SoundCue::Truck, SoundCue::Water]);
        std::fs::remove_file(path).ok();
    }
}
