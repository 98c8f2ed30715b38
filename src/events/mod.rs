//! Event and message types exchanged across systems.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`stage`] – stage transition notifications and their observers
pub mod audio;
pub mod stage;
