//! Fire evacuation scene entry point.
//!
//! A short animated vignette written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! A building catches fire, the alarm goes off, an emergency crew walks in, two
//! fire trucks arrive and put the fire out, then drive away. Everything is driven
//! by a fixed timeline on the elapsed scene time.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` and apply command line overrides
//! 2. Open the raylib window and render target, start the audio thread
//! 3. Build the scene world and the update schedule
//! 4. Each frame: advance the clock, run the schedule, capture a snapshot and
//!    draw it letterboxed into the window
//! 5. Stop every cue and join the audio thread on exit
//!
//! With `--headless` the same schedule runs with a fixed step and no window.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --headless --seed 7 --json
//! ```

// Do not create console on Windows release builds
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

mod components;
mod events;
mod game;
mod resources;
mod snapshot;
mod systems;

use crate::game::{AudioWiring, advance_frame, build_update_schedule, setup_scene};
use crate::resources::audio::{init_audio_messages, setup_audio, shutdown_audio};
use crate::resources::debugmode::DebugMode;
use crate::resources::eventlog::EventLog;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::windowsize::WindowSize;
use crate::snapshot::SceneSnapshot;
use crate::systems::render::{draw_debug_overlay, draw_scene};
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

/// Fire evacuation scene
#[derive(Parser)]
#[command(version, about = "A building catches fire and the firefighters put it out.")]
struct Cli {
    /// Configuration file to load.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the scene's random numbers (burning window, particles).
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Disable all sound.
    #[arg(long)]
    mute: bool,

    /// Show the diagnostics overlay.
    #[arg(long)]
    debug: bool,

    /// Run the scene without a window or audio device.
    ///
    /// On Windows, release builds have no console, so use a debug build to
    /// see the output.
    #[arg(long)]
    headless: bool,

    /// Scene seconds to simulate in headless mode.
    #[arg(long, value_name = "SECS", default_value_t = 40.0)]
    duration: f32,

    /// Fixed frames per second used in headless mode.
    #[arg(long, value_name = "FPS", default_value_t = 120)]
    step_fps: u32,

    /// Print the final scene snapshot as JSON (headless mode).
    #[arg(long)]
    json: bool,

    /// Write the effective configuration back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{} ({}), using defaults", e, cli.config.display());
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if cli.mute {
        config.audio_enabled = false;
    }

    if cli.save_config {
        match config.save_to_file() {
            Ok(()) => info!("Configuration written to {}", config.config_path.display()),
            Err(e) => error!("{}", e),
        }
    }

    if cli.headless {
        run_headless(&cli, &config);
    } else if let Err(e) = run_windowed(&cli, config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Fixed-step run without window or audio device.
fn run_headless(cli: &Cli, config: &GameConfig) {
    let mut world = World::new();
    init_audio_messages(&mut world);
    setup_scene(&mut world, config);
    let mut update = build_update_schedule(AudioWiring::Detached);

    let step_fps = cli.step_fps.max(1);
    let dt = 1.0 / step_fps as f32;
    let frames = (cli.duration.max(0.0) * step_fps as f32).ceil() as u64;
    info!("Headless run: {} frames at {} fps", frames, step_fps);

    for _ in 0..frames {
        advance_frame(&mut world, &mut update, dt);
    }

    let snap = SceneSnapshot::capture(&mut world);
    if cli.json {
        match serde_json::to_string_pretty(&snap) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("Failed to serialize snapshot: {}", e),
        }
    } else {
        let log = world.resource::<EventLog>();
        for entry in log.entries() {
            println!("{}", entry);
        }
        println!(
            "Final stage: {} at {:.2}s ({} frames, {} events)",
            snap.stage,
            snap.elapsed,
            snap.frame,
            log.len()
        );
    }
}

fn run_windowed(cli: &Cli, config: GameConfig) -> Result<(), String> {
    let (window_width, window_height) = config.window_size();

    let mut builder = raylib::init();
    builder
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Fire Evacuation");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    // --------------- Render target for fixed-resolution rendering ---------------
    let mut render_target =
        RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height)?;
    render_target.set_filter(config.render_filter);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    // Audio queues must exist before the scene registers its observers.
    let wiring = if config.audio_enabled {
        setup_audio(&mut world);
        AudioWiring::Bridge
    } else {
        init_audio_messages(&mut world);
        AudioWiring::Detached
    };

    setup_scene(&mut world, &config);
    let mut update = build_update_schedule(wiring);
    update
        .initialize(&mut world)
        .map_err(|e| format!("Failed to initialize schedule: {}", e))?;

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        advance_frame(&mut world, &mut update, dt);

        let snap = SceneSnapshot::capture(&mut world);
        let window_size = *world.resource::<WindowSize>();
        let show_debug = world.contains_resource::<DebugMode>();

        let mut d = rl.begin_drawing(&thread);
        let fps = d.get_fps();
        {
            let mut t = d.begin_texture_mode(&thread, &mut render_target.texture);
            draw_scene(&mut t, &snap);
            if show_debug {
                draw_debug_overlay(&mut t, &snap, fps);
            }
        }
        d.clear_background(Color::BLACK);
        let dest = window_size.calculate_letterbox(
            render_target.game_width,
            render_target.game_height,
        );
        d.draw_texture_pro(
            &render_target.texture,
            render_target.source_rect(),
            dest,
            Vector2::zero(),
            0.0,
            Color::WHITE,
        );
        drop(d);

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = (rl.get_screen_width(), rl.get_screen_height());
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }

    shutdown_audio(&mut world);
    Ok(())
}
