//! Fire evacuation scene library.
//!
//! This module exposes the scene's ECS components, resources, systems, and events
//! for use in integration tests and headless runs.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod snapshot;
pub mod systems;
