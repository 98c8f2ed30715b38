//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! scene's render resolution. Updated each frame to handle window resizing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Destination rectangle that fits the scene into the window.
    ///
    /// Preserves the scene's aspect ratio and centers it, leaving bars on the
    /// sides (pillarbox) or on top and bottom (letterbox).
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w.max(1) as f32;
        let window_h = self.h.max(1) as f32;

        let game_aspect = game_w / game_h;
        let window_aspect = window_w / window_h;

        if window_aspect > game_aspect {
            let scale = window_h / game_h;
            let scaled_w = game_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            let scale = window_w / game_w;
            let scaled_h = game_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_aspect_fills_window() {
        let r = WindowSize { w: 1600, h: 1000 }.calculate_letterbox(800, 500);
        assert_eq!((r.x, r.y, r.width, r.height), (0.0, 0.0, 1600.0, 1000.0));
    }

    #[test]
    fn wide_window_is_pillarboxed() {
        let r = WindowSize { w: 1200, h: 500 }.calculate_letterbox(800, 500);
        assert_eq!((r.x, r.width, r.height), (200.0, 800.0, 500.0));
    }

    #[test]
    fn tall_window_is_letterboxed() {
        let r = WindowSize { w: 800, h: 900 }.calculate_letterbox(800, 500);
        assert_eq!((r.y, r.width, r.height), (200.0, 800.0, 500.0));
    }
}
