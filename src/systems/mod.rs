//! Scene systems.
//!
//! Submodules overview
//! - [`alarm`] – step the alarm light's blink timer
//! - [`audio`] – bridge with the audio thread and the thread itself
//! - [`humans`] – walk the crew toward the building
//! - [`particles`] – reap, move and spawn fire particles
//! - [`render`] – draw a scene snapshot with raylib
//! - [`stage`] – advance the scripted stage
//! - [`time`] – update simulation time and delta
//! - [`trucks`] – drive, park, spray and leave with the fire trucks

pub mod alarm;
pub mod audio;
pub mod humans;
pub mod particles;
pub mod render;
pub mod stage;
pub mod time;
pub mod trucks;
