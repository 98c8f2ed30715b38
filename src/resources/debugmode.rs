//! Debug toggle resource.
//!
//! The mere presence of this resource makes the renderer draw the debug
//! overlay (FPS, particle count, seed).

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the debug overlay is drawn.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode {}
