//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio device,
//!   and processes [`AudioCmd`] messages, emitting [`AudioMessage`] responses.
//! - [`forward_audio_cmds`] sends the frame's commands over the channel.
//! - [`poll_audio_messages`] non-blockingly drains the audio thread's replies
//!   into the ECS message queue.
//! - [`apply_audio_messages`] keeps the [`SoundBoard`] in sync with what the
//!   thread actually managed to play.
//!
//! Cues are streamed as `Music` and restarted when they reach the end, so a
//! started cue loops until it is stopped. A missing or undecodable file is
//! reported and the cue stays silent; a missing audio device silences every
//! cue. Neither stops the scene.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use crate::resources::soundboard::{SoundBoard, SoundCue};
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error, info, warn};
use raylib::core::audio::{Music, RaylibAudio};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain any pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Reflect audio thread failures back into the [`SoundBoard`].
///
/// A cue that failed to load is forgotten so a later start retries it; a
/// missing device silences the board for the rest of the run.
pub fn apply_audio_messages(
    mut reader: MessageReader<AudioMessage>,
    mut sounds: ResMut<SoundBoard>,
) {
    for msg in reader.read() {
        match msg {
            AudioMessage::CueLoadFailed { cue, error } => {
                warn!("Sound cue '{}' could not be played: {}", cue, error);
                sounds.mark_stopped(*cue);
            }
            AudioMessage::DeviceUnavailable { error } => {
                warn!("No audio device, continuing silently: {}", error);
                sounds.silence();
            }
            other => debug!("Audio: {:?}", other),
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Responsibilities:
/// - Initialize the Raylib audio device once for the life of the thread.
/// - Own all `Music` handles, loading each cue on its first `PlayCue`.
/// - Pump the streams and restart cues that reach their end.
///
/// This function blocks until it receives [`AudioCmd::Shutdown`] or the
/// command channel disconnects.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            error!("[audio] failed to initialize audio device: {}", e);
            let _ = tx_evt.send(AudioMessage::DeviceUnavailable {
                error: e.to_string(),
            });
            drain_until_shutdown(&rx_cmd);
            return;
        }
    };

    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut musics: FxHashMap<SoundCue, Music> = FxHashMap::default();
    let mut playing: FxHashSet<SoundCue> = FxHashSet::default();

    'run: loop {
        // 1) Drain commands
        loop {
            let cmd = match rx_cmd.try_recv() {
                Ok(cmd) => cmd,
                Err(crossbeam_channel::TryRecvError::Empty) => break,
                Err(crossbeam_channel::TryRecvError::Disconnected) => break 'run,
            };
            match cmd {
                AudioCmd::PlayCue { cue, path } => {
                    if playing.contains(&cue) {
                        debug!("[audio] cue '{}' already playing", cue);
                        continue;
                    }
                    if !musics.contains_key(&cue) {
                        match audio.new_music(&path) {
                            Ok(music) => {
                                debug!("[audio] loaded cue '{}' path='{}'", cue, path);
                                musics.insert(cue, music);
                            }
                            Err(e) => {
                                warn!(
                                    "[audio] load failed cue='{}' path='{}' error='{}'",
                                    cue, path, e
                                );
                                let _ = tx_evt.send(AudioMessage::CueLoadFailed {
                                    cue,
                                    error: e.to_string(),
                                });
                                continue;
                            }
                        }
                    }
                    if let Some(music) = musics.get(&cue) {
                        debug!("[audio] play cue '{}'", cue);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(cue);
                        let _ = tx_evt.send(AudioMessage::CueStarted { cue });
                    }
                }
                AudioCmd::StopCue { cue } => {
                    if playing.remove(&cue) {
                        if let Some(music) = musics.get(&cue) {
                            debug!("[audio] stop cue '{}'", cue);
                            music.stop_stream();
                        }
                        let _ = tx_evt.send(AudioMessage::CueStopped { cue });
                    }
                }
                AudioCmd::StopAll => {
                    for cue in playing.drain() {
                        if let Some(music) = musics.get(&cue) {
                            music.stop_stream();
                        }
                        let _ = tx_evt.send(AudioMessage::CueStopped { cue });
                    }
                }
                AudioCmd::Shutdown => {
                    debug!("[audio] shutdown requested");
                    break 'run;
                }
            }
        }

        // 2) Pump streaming, restart cues that reached their end
        for cue in playing.iter() {
            if let Some(music) = musics.get(cue) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    let len = music.get_time_length();
                    let played = music.get_time_played();
                    if played >= len - 0.01 {
                        debug!("[audio] restarting cue '{}'", cue);
                        music.seek_stream(0.0);
                        music.play_stream();
                        let _ = tx_evt.send(AudioMessage::CueRestarted { cue: *cue });
                    }
                }
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    } // 'run

    playing.clear();
    musics.clear();
    info!(
        "[audio] thread exiting (id={:?})",
        std::thread::current().id()
    );
}

/// Without a device, swallow commands until shutdown so senders never block.
fn drain_until_shutdown(rx_cmd: &Receiver<AudioCmd>) {
    for cmd in rx_cmd.iter() {
        if matches!(cmd, AudioCmd::Shutdown) {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::system::SystemState;

    #[test]
    fn load_failure_frees_the_cue() {
        let path = std::env::temp_dir().join(format!(
            "firescene-audio-{}-alarm.wav",
            std::process::id()
        ));
        std::fs::write(&path, b"RIFF").unwrap();

        let mut world = World::new();
        world.init_resource::<Messages<AudioMessage>>();
        let mut board = SoundBoard::new().with_path(SoundCue::Alarm, &path);
        assert!(board.start(SoundCue::Alarm).is_some());
        world.insert_resource(board);

        {
            let mut state = SystemState::<MessageWriter<AudioMessage>>::new(&mut world);
            let mut writer = state.get_mut(&mut world);
            writer.write(AudioMessage::CueLoadFailed {
                cue: SoundCue::Alarm,
                error: "bad header".into(),
            });
            state.apply(&mut world);
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(apply_audio_messages);
        schedule.run(&mut world);

        assert!(!world.resource::<SoundBoard>().is_playing(SoundCue::Alarm));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_device_mutes_the_board() {
        let mut world = World::new();
        world.init_resource::<Messages<AudioMessage>>();
        world.insert_resource(SoundBoard::new());
        {
            let mut state = SystemState::<MessageWriter<AudioMessage>>::new(&mut world);
            let mut writer = state.get_mut(&mut world);
            writer.write(AudioMessage::DeviceUnavailable {
                error: "no device".into(),
            });
            state.apply(&mut world);
        }

        let mut schedule = Schedule::default();
        schedule.add_systems(apply_audio_messages);
        schedule.run(&mut world);

        assert!(world.resource::<SoundBoard>().is_muted());
    }
}
