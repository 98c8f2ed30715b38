//! ECS resources made available to systems.
//!
//! Overview
//! - `alarmbeacon` – blink state of the alarm light
//! - `audio` – bridge and channels for the background audio thread
//! - `debugmode` – presence toggles the debug overlay
//! - `eventlog` – append-only list of scene events shown in the HUD
//! - `gameconfig` – settings loaded from `config.ini`
//! - `pacing` – whether actor steps follow frames or frame time
//! - `rendertarget` – fixed-resolution off-screen texture (main thread only)
//! - `scenerng` – seeded random source for window choice and particle jitter
//! - `skyline` – building layout shared by rendering and fire targeting
//! - `soundboard` – idempotent start/stop state of the sound cues
//! - `stage` – current scripted stage and the transition table
//! - `windowsize` – actual window dimensions and letterboxing
//! - `worldtime` – simulation time and delta
pub mod alarmbeacon;
pub mod audio;
pub mod debugmode;
pub mod eventlog;
pub mod gameconfig;
pub mod pacing;
pub mod rendertarget;
pub mod scenerng;
pub mod skyline;
pub mod soundboard;
pub mod stage;
pub mod windowsize;
pub mod worldtime;
