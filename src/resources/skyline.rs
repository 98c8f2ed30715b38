//! Building layout shared by the renderer, the particle anchor and the hose
//! target.
//!
//! All coordinates are in scene units (800 x 500, y down). Buildings stand on
//! the ground line at [`GROUND_Y`].

use bevy_ecs::prelude::Resource;
use serde::Serialize;

pub const GROUND_Y: f32 = 400.0;

/// Lower floors of the main building that can catch fire.
pub const BURNABLE_FLOORS: usize = 3;

/// Geometry of one building and its window grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildingLayout {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub floors: usize,
    pub windows_per_floor: usize,
    /// Body colour as RGB.
    pub rgb: (u8, u8, u8),
}

/// Centre and size of a window rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRect {
    pub cx: f32,
    pub cy: f32,
    pub width: f32,
    pub height: f32,
}

impl BuildingLayout {
    pub fn top(&self) -> f32 {
        GROUND_Y - self.height
    }

    pub fn window_count(&self) -> usize {
        self.floors * self.windows_per_floor
    }

    /// Windows numbered floor by floor from the ground, `floor * per_floor + col`.
    pub fn window(&self, index: usize) -> WindowRect {
        let floor = index / self.windows_per_floor;
        let col = index % self.windows_per_floor;
        let column_width = self.width / (self.windows_per_floor as f32 + 1.0);
        let floor_height = self.height / self.floors as f32;
        WindowRect {
            cx: self.x + (col as f32 + 0.5) * column_width,
            cy: GROUND_Y - (floor as f32 + 0.5) * floor_height,
            width: column_width * 0.8,
            height: self.height / (self.floors as f32 + 1.0) * 0.6,
        }
    }
}

/// The three buildings of the street; `main` is the one that burns.
#[derive(Resource, Debug, Clone, Serialize)]
pub struct Skyline {
    pub buildings: Vec<BuildingLayout>,
    pub main: usize,
}

impl Default for Skyline {
    fn default() -> Self {
        Self {
            buildings: vec![
                BuildingLayout {
                    x: 100.0,
                    width: 80.0,
                    height: 120.0,
                    floors: 4,
                    windows_per_floor: 3,
                    rgb: (153, 153, 204),
                },
                BuildingLayout {
                    x: 300.0,
                    width: 100.0,
                    height: 150.0,
                    floors: 5,
                    windows_per_floor: 5,
                    rgb: (178, 178, 178),
                },
                BuildingLayout {
                    x: 500.0,
                    width: 90.0,
                    height: 130.0,
                    floors: 4,
                    windows_per_floor: 4,
                    rgb: (204, 153, 153),
                },
            ],
            main: 1,
        }
    }
}

impl Skyline {
    pub fn main_building(&self) -> &BuildingLayout {
        &self.buildings[self.main]
    }

    /// Number of windows the fire can pick from.
    pub fn burnable_windows(&self) -> usize {
        let main = self.main_building();
        main.windows_per_floor * BURNABLE_FLOORS.min(main.floors)
    }

    /// Centre of a window of the main building, where flames and hoses aim.
    pub fn fire_anchor(&self, window: usize) -> (f32, f32) {
        let rect = self.main_building().window(window);
        (rect.cx, rect.cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn fifteen_burnable_windows() {
        assert_eq!(Skyline::default().burnable_windows(), 15);
    }

    #[test]
    fn anchor_of_first_window() {
        let skyline = Skyline::default();
        let (x, y) = skyline.fire_anchor(0);
        assert!(approx_eq(x, 300.0 + 0.5 * 100.0 / 6.0));
        assert!(approx_eq(y, 400.0 - 0.5 * 30.0));
    }

    #[test]
    fn anchor_of_last_burnable_window() {
        let skyline = Skyline::default();
        let (x, y) = skyline.fire_anchor(14);
        assert!(approx_eq(x, 300.0 + 4.5 * 100.0 / 6.0));
        assert!(approx_eq(y, 400.0 - 2.5 * 30.0));
    }

    #[test]
    fn anchor_matches_drawn_window() {
        let skyline = Skyline::default();
        let rect = skyline.main_building().window(8);
        assert_eq!(skyline.fire_anchor(8), (rect.cx, rect.cy));
    }
}
