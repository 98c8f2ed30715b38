//! Scene drawing with raylib.
//!
//! Everything here reads a [`SceneSnapshot`]; the renderer never touches the
//! ECS world. Coordinates are scene units (800 x 500, y down), drawn into the
//! fixed-resolution render target.

use raylib::prelude::*;

use crate::resources::skyline::{BuildingLayout, GROUND_Y};
use crate::snapshot::{CrewState, SceneSnapshot};
use crate::components::firetruck::TruckState;

const SCENE_WIDTH: f32 = 800.0;
const SCENE_HEIGHT: f32 = 500.0;
const ROAD_HEIGHT: f32 = 50.0;

const SKY_TOP: Color = Color::new(135, 206, 250, 255);
const SKY_BOTTOM: Color = Color::new(178, 230, 255, 255);
const ROAD: Color = Color::new(51, 51, 51, 255);
const LEAVES: Color = Color::new(0, 128, 0, 255);
const TRUNK: Color = Color::new(102, 51, 0, 255);
const WINDOW: Color = Color::new(204, 230, 255, 255);
const WINDOW_FRAME: Color = Color::new(77, 77, 77, 255);
const WINDOW_FIRE: Color = Color::new(255, 128, 0, 255);
const ROOF: Color = Color::new(102, 102, 102, 255);
const TRUCK_BODY: Color = Color::new(255, 128, 0, 255);
const TRUCK_CABIN: Color = Color::new(230, 230, 230, 255);
const WHEEL: Color = Color::new(26, 26, 26, 255);
const HOSE: Color = Color::new(51, 128, 255, 153);
const HUD_PANEL: Color = Color::new(0, 0, 0, 178);

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::new(r, g, b, 255)
}

/// Draw the whole frame for `snap`.
pub fn draw_scene(d: &mut impl RaylibDraw, snap: &SceneSnapshot) {
    d.draw_rectangle_gradient_v(
        0,
        0,
        SCENE_WIDTH as i32,
        SCENE_HEIGHT as i32,
        SKY_TOP,
        SKY_BOTTOM,
    );
    for (x, y, r) in [(100.0, 80.0, 30.0), (500.0, 120.0, 40.0), (700.0, 60.0, 25.0)] {
        d.draw_circle_v(Vector2::new(x, y), r, Color::WHITE);
    }
    draw_road(d);
    draw_trees(d);

    for (index, building) in snap.skyline.buildings.iter().enumerate() {
        let burning = if index == snap.skyline.main && snap.stage.fire_active() {
            snap.burning_window
        } else {
            None
        };
        draw_building(d, building, burning, index == snap.skyline.main);
    }

    if snap.stage.fire_active() {
        for p in &snap.particles {
            let (r, g, b, a) = p.rgba;
            d.draw_circle_v(Vector2::new(p.x, p.y), p.size * 0.5, Color::new(r, g, b, a));
        }
    }

    if snap.stage.humans_visible() {
        if let Some(crew) = &snap.crew {
            draw_crew(d, crew, snap.elapsed);
        }
    }

    let hose_target = snap.fire_target();
    for truck in &snap.trucks {
        draw_truck(d, truck, hose_target);
    }

    if snap.stage.alarm_active() && snap.alarm_lit {
        d.draw_rectangle_rec(Rectangle::new(280.0, 250.0, 10.0, 10.0), Color::RED);
    }

    draw_hud(d, snap);
}

fn draw_road(d: &mut impl RaylibDraw) {
    d.draw_rectangle_rec(
        Rectangle::new(0.0, GROUND_Y, SCENE_WIDTH, ROAD_HEIGHT),
        ROAD,
    );
    for i in 0..8 {
        let x = 50.0 + i as f32 * 100.0;
        d.draw_rectangle_rec(Rectangle::new(x, 425.0, 30.0, 5.0), Color::WHITE);
    }
}

fn draw_trees(d: &mut impl RaylibDraw) {
    for i in 0..15 {
        let x = 50.0 + i as f32 * 50.0;
        // keep the main building's frontage clear
        if x > 250.0 && x < 550.0 {
            continue;
        }
        d.draw_rectangle_rec(Rectangle::new(x - 5.0, 370.0, 10.0, 30.0), TRUNK);
        d.draw_circle_v(Vector2::new(x, 370.0), 15.0, LEAVES);
    }
}

fn draw_building(
    d: &mut impl RaylibDraw,
    building: &BuildingLayout,
    burning: Option<usize>,
    with_roof: bool,
) {
    d.draw_rectangle_rec(
        Rectangle::new(building.x, building.top(), building.width, building.height),
        rgb(building.rgb),
    );

    for index in 0..building.window_count() {
        let w = building.window(index);
        let rect = Rectangle::new(
            w.cx - w.width * 0.5,
            w.cy - w.height * 0.5,
            w.width,
            w.height,
        );
        let fill = if burning == Some(index) {
            WINDOW_FIRE
        } else {
            WINDOW
        };
        d.draw_rectangle_rec(rect, fill);
        d.draw_rectangle_lines_ex(rect, 1.0, WINDOW_FRAME);
    }

    if with_roof {
        let base = building.top();
        let top = base - 20.0;
        let left = building.x;
        let right = building.x + building.width;
        d.draw_rectangle_rec(Rectangle::new(left, top, building.width, 20.0), ROOF);
        // raylib wants counter-clockwise vertices
        d.draw_triangle(
            Vector2::new(left, top),
            Vector2::new(left - 10.0, base),
            Vector2::new(left, base),
            ROOF,
        );
        d.draw_triangle(
            Vector2::new(right, top),
            Vector2::new(right, base),
            Vector2::new(right + 10.0, base),
            ROOF,
        );
    }
}

fn draw_crew(d: &mut impl RaylibDraw, crew: &CrewState, elapsed: f32) {
    for i in 0..crew.members {
        let phase = i as f32;
        let x = crew.x + phase * crew.spacing;
        let y = crew.y + (elapsed * 2.0 + phase).sin() * 5.0;

        d.draw_circle_v(Vector2::new(x, y), 3.0, Color::BLACK);
        d.draw_line_v(Vector2::new(x, y), Vector2::new(x, y + 15.0), Color::BLACK);
        d.draw_line_v(
            Vector2::new(x, y + 15.0),
            Vector2::new(x - 5.0, y + 25.0),
            Color::BLACK,
        );
        d.draw_line_v(
            Vector2::new(x, y + 15.0),
            Vector2::new(x + 5.0, y + 25.0),
            Color::BLACK,
        );

        let swing = ((elapsed * 5.0 + phase).sin() * 30.0).to_radians();
        let (dx, dy) = (10.0 * swing.cos(), 10.0 * swing.sin());
        let shoulder = Vector2::new(x, y + 10.0);
        d.draw_line_v(
            Vector2::new(shoulder.x - dx, shoulder.y - dy),
            Vector2::new(shoulder.x + dx, shoulder.y + dy),
            Color::BLACK,
        );
    }
}

fn draw_truck(d: &mut impl RaylibDraw, truck: &TruckState, hose_target: Option<(f32, f32)>) {
    d.draw_rectangle_rec(Rectangle::new(truck.x, 370.0, 60.0, 30.0), TRUCK_BODY);
    d.draw_rectangle_rec(Rectangle::new(truck.x + 40.0, 370.0, 20.0, 20.0), TRUCK_CABIN);
    for i in 0..2 {
        d.draw_circle_v(
            Vector2::new(truck.x + 15.0 + i as f32 * 30.0, GROUND_Y),
            10.0,
            WHEEL,
        );
    }

    if truck.spraying {
        if let Some((tx, ty)) = hose_target {
            d.draw_line_ex(
                Vector2::new(truck.x + 30.0, 385.0),
                Vector2::new(tx, ty),
                2.0,
                HOSE,
            );
        }
    }
}

fn draw_hud(d: &mut impl RaylibDraw, snap: &SceneSnapshot) {
    d.draw_rectangle_rec(Rectangle::new(10.0, 10.0, 290.0, 110.0), HUD_PANEL);
    d.draw_text(snap.status, 20, 18, 20, rgb(snap.stage.status_rgb()));
    d.draw_text(
        &format!("Time: {:.1}s", snap.elapsed),
        20,
        45,
        18,
        Color::WHITE,
    );
    for (i, entry) in snap.recent_events.iter().enumerate() {
        d.draw_text(entry, 20, 72 + i as i32 * 15, 12, Color::WHITE);
    }
}

/// Diagnostics drawn on top of the scene when [`DebugMode`](crate::resources::debugmode::DebugMode) is present.
pub fn draw_debug_overlay(d: &mut impl RaylibDraw, snap: &SceneSnapshot, fps: u32) {
    let lines = [
        format!("FPS: {}", fps),
        format!("Frame: {}", snap.frame),
        format!("Particles: {}", snap.particle_count),
        format!(
            "Seed: {}",
            snap.seed.map_or_else(|| "-".to_string(), |s| s.to_string())
        ),
        format!("Cues: {:?}", snap.cues_playing),
    ];
    for (i, line) in lines.iter().enumerate() {
        d.draw_text(line, 10, 420 + i as i32 * 14, 10, Color::BLACK);
    }
}
