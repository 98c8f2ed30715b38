//! How actor steps relate to frame time.

use bevy_ecs::prelude::Resource;

/// Trucks and humans move by fixed steps. `PerFrame` applies the step once per
/// update, so speed follows the frame rate. `Scaled` rescales the step by the
/// frame delta as if the scene ran at `reference_fps`; a frame with a zero
/// delta (paused clock, first frame) moves nothing.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub enum ActorPacing {
    #[default]
    PerFrame,
    Scaled { reference_fps: f32 },
}

impl ActorPacing {
    /// Distance to move this frame for a nominal per-frame `step`.
    pub fn step(&self, step: f32, dt: f32) -> f32 {
        match self {
            ActorPacing::PerFrame => step,
            ActorPacing::Scaled { reference_fps } => step * dt * reference_fps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_frame_ignores_delta() {
        assert_eq!(ActorPacing::PerFrame.step(0.8, 0.5), 0.8);
    }

    #[test]
    fn scaled_matches_reference_rate() {
        let pacing = ActorPacing::Scaled { reference_fps: 60.0 };
        assert!((pacing.step(0.8, 1.0 / 60.0) - 0.8).abs() < 1e-6);
        assert!((pacing.step(0.8, 1.0 / 30.0) - 1.6).abs() < 1e-6);
    }

    #[test]
    fn scaled_holds_still_on_zero_delta() {
        let pacing = ActorPacing::Scaled { reference_fps: 60.0 };
        assert_eq!(pacing.step(1.5, 0.0), 0.0);
        assert_eq!(ActorPacing::PerFrame.step(1.5, 0.0), 1.5);
    }
}
