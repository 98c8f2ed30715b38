//! Scene configuration resource.
//!
//! Settings are loaded from an INI configuration file. Missing keys keep their
//! defaults, so an absent or partial file is never an error for the scene.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 800
//! height = 500
//! filter = bilinear
//!
//! [window]
//! width = 800
//! height = 500
//! target_fps = 120
//! vsync = true
//!
//! [simulation]
//! seed = 42
//! time_scale = 1.0
//! actor_pacing = frame
//! reference_fps = 60
//!
//! [audio]
//! enabled = true
//! alarm = ./assets/sounds/FireAlarm.wav
//! truck = ./assets/sounds/TruckArrive.wav
//! water = ./assets/sounds/WaterSpray.wav
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::resources::pacing::ActorPacing;
use crate::resources::rendertarget::RenderFilter;
use crate::resources::soundboard::{SoundBoard, SoundCue};

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 800;
const DEFAULT_RENDER_HEIGHT: u32 = 500;
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 500;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_REFERENCE_FPS: f32 = 60.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";
const DEFAULT_ALARM_SOUND: &str = "./assets/sounds/FireAlarm.wav";
const DEFAULT_TRUCK_SOUND: &str = "./assets/sounds/TruckArrive.wav";
const DEFAULT_WATER_SOUND: &str = "./assets/sounds/WaterSpray.wav";

/// Scene configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Logical scene width the renderer draws at.
    pub render_width: u32,
    /// Logical scene height the renderer draws at.
    pub render_height: u32,
    /// Scaling filter for the render target: `nearest` or `bilinear`.
    pub render_filter: RenderFilter,
    pub window_width: u32,
    pub window_height: u32,
    pub target_fps: u32,
    pub vsync: bool,
    /// Fixed seed for window selection and particle jitter. `None` picks one.
    pub seed: Option<u64>,
    pub time_scale: f32,
    pub actor_pacing: ActorPacing,
    pub audio_enabled: bool,
    pub alarm_sound: PathBuf,
    pub truck_sound: PathBuf,
    pub water_sound: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            render_filter: RenderFilter::default(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            seed: None,
            time_scale: DEFAULT_TIME_SCALE,
            actor_pacing: ActorPacing::PerFrame,
            audio_enabled: true,
            alarm_sound: PathBuf::from(DEFAULT_ALARM_SOUND),
            truck_sound: PathBuf::from(DEFAULT_TRUCK_SOUND),
            water_sound: PathBuf::from(DEFAULT_WATER_SOUND),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} render, {}x{} window, fps={}, vsync={}, seed={:?}, pacing={:?}, audio={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.seed,
            self.actor_pacing,
            self.audio_enabled
        );

        Ok(())
    }

    /// Parse configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }
        match config.get("render", "filter").as_deref() {
            Some("nearest") => self.render_filter = RenderFilter::Nearest,
            Some("bilinear") => self.render_filter = RenderFilter::Bilinear,
            Some(other) => warn!("Unknown render filter '{}', keeping {:?}", other, self.render_filter),
            None => {}
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [simulation] section
        if let Some(seed) = config.getuint("simulation", "seed").ok().flatten() {
            self.seed = Some(seed);
        }
        if let Some(scale) = config.getfloat("simulation", "time_scale").ok().flatten() {
            if scale > 0.0 {
                self.time_scale = scale as f32;
            } else {
                warn!("Ignoring non-positive time_scale {}", scale);
            }
        }
        let reference_fps = config
            .getfloat("simulation", "reference_fps")
            .ok()
            .flatten()
            .filter(|fps| *fps > 0.0)
            .map(|fps| fps as f32)
            .unwrap_or(DEFAULT_REFERENCE_FPS);
        match config.get("simulation", "actor_pacing").as_deref() {
            Some("frame") => self.actor_pacing = ActorPacing::PerFrame,
            Some("scaled") => self.actor_pacing = ActorPacing::Scaled { reference_fps },
            Some(other) => warn!("Unknown actor_pacing '{}', keeping {:?}", other, self.actor_pacing),
            None => {}
        }

        // [audio] section
        if let Some(enabled) = config.getbool("audio", "enabled").ok().flatten() {
            self.audio_enabled = enabled;
        }
        if let Some(path) = config.get("audio", "alarm") {
            self.alarm_sound = PathBuf::from(path);
        }
        if let Some(path) = config.get("audio", "truck") {
            self.truck_sound = PathBuf::from(path);
        }
        if let Some(path) = config.get("audio", "water") {
            self.water_sound = PathBuf::from(path);
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));
        let filter = match self.render_filter {
            RenderFilter::Nearest => "nearest",
            RenderFilter::Bilinear => "bilinear",
        };
        config.set("render", "filter", Some(filter.to_string()));

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));

        if let Some(seed) = self.seed {
            config.set("simulation", "seed", Some(seed.to_string()));
        }
        config.set("simulation", "time_scale", Some(self.time_scale.to_string()));
        match self.actor_pacing {
            ActorPacing::PerFrame => {
                config.set("simulation", "actor_pacing", Some("frame".to_string()));
            }
            ActorPacing::Scaled { reference_fps } => {
                config.set("simulation", "actor_pacing", Some("scaled".to_string()));
                config.set("simulation", "reference_fps", Some(reference_fps.to_string()));
            }
        }

        config.set("audio", "enabled", Some(self.audio_enabled.to_string()));
        config.set("audio", "alarm", Some(self.alarm_sound.display().to_string()));
        config.set("audio", "truck", Some(self.truck_sound.display().to_string()));
        config.set("audio", "water", Some(self.water_sound.display().to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Sound board for the configured cue files, muted when audio is disabled.
    pub fn sound_board(&self) -> SoundBoard {
        let board = if self.audio_enabled {
            SoundBoard::new()
        } else {
            SoundBoard::muted()
        };
        board
            .with_path(SoundCue::Alarm, &self.alarm_sound)
            .with_path(SoundCue::Truck, &self.truck_sound)
            .with_path(SoundCue::Water, &self.water_sound)
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_scene_size() {
        let config = GameConfig::new();
        assert_eq!((config.render_width, config.render_height), (800, 500));
        assert_eq!(config.window_size(), (800, 500));
        assert_eq!(config.seed, None);
        assert_eq!(config.actor_pacing, ActorPacing::PerFrame);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[window]\ntarget_fps = 60\n")
            .unwrap();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.window_width, 800);
        assert!(config.vsync);
    }

    #[test]
    fn simulation_section_is_parsed() {
        let mut config = GameConfig::new();
        config
            .load_from_str(
                "[simulation]\nseed = 1234\ntime_scale = 2.0\nactor_pacing = scaled\nreference_fps = 30\n",
            )
            .unwrap();
        assert_eq!(config.seed, Some(1234));
        assert!((config.time_scale - 2.0).abs() < 1e-6);
        assert_eq!(
            config.actor_pacing,
            ActorPacing::Scaled {
                reference_fps: 30.0
            }
        );
    }

    #[test]
    fn render_filter_is_parsed() {
        let mut config = GameConfig::new();
        assert_eq!(config.render_filter, RenderFilter::Bilinear);
        config
            .load_from_str("[render]\nfilter = nearest\n")
            .unwrap();
        assert_eq!(config.render_filter, RenderFilter::Nearest);

        config
            .load_from_str("[render]\nfilter = blurry\n")
            .unwrap();
        assert_eq!(config.render_filter, RenderFilter::Nearest);
    }

    #[test]
    fn bad_values_are_ignored() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[simulation]\ntime_scale = -1\nactor_pacing = warp\n")
            .unwrap();
        assert!((config.time_scale - 1.0).abs() < 1e-6);
        assert_eq!(config.actor_pacing, ActorPacing::PerFrame);
    }

    #[test]
    fn audio_disabled_gives_muted_board() {
        let mut config = GameConfig::new();
        config
            .load_from_str("[audio]\nenabled = false\nalarm = /tmp/a.wav\n")
            .unwrap();
        let board = config.sound_board();
        assert!(board.is_muted());
        assert_eq!(
            board.path(SoundCue::Alarm),
            Some(std::path::Path::new("/tmp/a.wav"))
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut config = GameConfig::with_path("/definitely/not/here/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.target_fps, 120);
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = std::env::temp_dir().join(format!(
            "firescene-config-{}.ini",
            std::process::id()
        ));
        let mut saved = GameConfig::with_path(&path);
        saved.seed = Some(99);
        saved.target_fps = 75;
        saved.render_filter = RenderFilter::Nearest;
        saved.actor_pacing = ActorPacing::Scaled {
            reference_fps: 60.0,
        };
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.seed, Some(99));
        assert_eq!(loaded.target_fps, 75);
        assert_eq!(loaded.render_filter, RenderFilter::Nearest);
        assert_eq!(loaded.actor_pacing, saved.actor_pacing);
        std::fs::remove_file(path).ok();
    }
}
