//! ECS components for the scene's actors.
//!
//! Submodules overview:
//! - [`fireparticle`] – short-lived flame and smoke particles
//! - [`firetruck`] – the two trucks and their approach/spray/leave flags
//! - [`humangroup`] – the crew of humans walking to the building
//! - [`mapposition`] – scene-space position of an actor

pub mod fireparticle;
pub mod firetruck;
pub mod humangroup;
pub mod mapposition;
