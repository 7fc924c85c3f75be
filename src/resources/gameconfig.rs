//! Simulation tuning configuration resource.
//!
//! Manages the tuning constants of the locomotion, street streaming, and
//! camera systems, loaded from an INI configuration file. Provides defaults
//! for safe startup; missing values keep their defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [movement]
//! move_speed = 4.0
//! sneak_speed = 1.5
//! turn_speed = 3.0
//! jump_velocity = 5.0
//! gravity = 15.0
//!
//! [street]
//! segment_length = 40.0
//! trigger_distance = 120.0
//! window_capacity = 10
//! turn_probability = 0.3
//!
//! [camera]
//! lerp_factor = 0.05
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec3;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup. The street values
/// (length/trigger/capacity/probability) were tuned empirically and are
/// deliberately independent constants, not derived from each other.
const DEFAULT_MOVE_SPEED: f32 = 4.0;
const DEFAULT_SNEAK_SPEED: f32 = 1.5;
const DEFAULT_TURN_SPEED: f32 = 3.0;
const DEFAULT_JUMP_VELOCITY: f32 = 5.0;
const DEFAULT_GRAVITY: f32 = 15.0;
const DEFAULT_GROUND_HEIGHT: f32 = 0.25;
const DEFAULT_RUN_THRESHOLD: f32 = 3.0;
const DEFAULT_IDLE_THRESHOLD: f32 = 0.1;
const DEFAULT_GAIT_RATE_WALK: f32 = 8.0;
const DEFAULT_GAIT_RATE_RUN: f32 = 12.0;
const DEFAULT_GAIT_RATE_SNEAK: f32 = 4.0;
const DEFAULT_SEGMENT_LENGTH: f32 = 40.0;
const DEFAULT_TRIGGER_DISTANCE: f32 = 120.0;
const DEFAULT_WINDOW_CAPACITY: usize = 10;
const DEFAULT_TURN_PROBABILITY: f32 = 0.3;
const DEFAULT_CAMERA_LERP: f32 = 0.05;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Simulation configuration resource.
///
/// Stores the tuning constants consumed by the locomotion, street stream,
/// and camera systems. Values can be overridden from an INI file via
/// [`SimConfig::load_from_file`].
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Longitudinal speed while walking or running, units per second.
    pub move_speed: f32,
    /// Longitudinal speed while sneaking, units per second.
    pub sneak_speed: f32,
    /// Yaw rate from the left/right intents, radians per second.
    pub turn_speed: f32,
    /// Vertical launch velocity on jump, units per second.
    pub jump_velocity: f32,
    /// Downward acceleration while airborne, units per second squared.
    pub gravity: f32,
    /// Resting height of the cat's origin above the street.
    pub ground_height: f32,
    /// Horizontal speed above which grounded movement counts as running.
    pub run_threshold: f32,
    /// Horizontal speed below which grounded movement counts as idle.
    pub idle_threshold: f32,
    /// Gait phase advance rate while walking, radians per second.
    pub gait_rate_walk: f32,
    /// Gait phase advance rate while running, radians per second.
    pub gait_rate_run: f32,
    /// Gait phase advance rate while sneaking, radians per second.
    pub gait_rate_sneak: f32,
    /// Forward extent of one street segment, world units.
    pub segment_length: f32,
    /// Distance to the newest segment origin below which a new segment is
    /// appended.
    pub trigger_distance: f32,
    /// Maximum number of live segments in the stream window.
    pub window_capacity: usize,
    /// Probability that a newly appended segment turns by a quarter turn.
    pub turn_probability: f32,
    /// Eye offset from the cat in its local frame.
    pub camera_eye_offset: Vec3,
    /// Look-at offset from the cat in its local frame.
    pub camera_look_offset: Vec3,
    /// Per-tick lerp factor for the camera eye. Deliberately not
    /// delta-time normalized; smoothing speed is coupled to tick rate.
    pub camera_lerp: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            sneak_speed: DEFAULT_SNEAK_SPEED,
            turn_speed: DEFAULT_TURN_SPEED,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            gravity: DEFAULT_GRAVITY,
            ground_height: DEFAULT_GROUND_HEIGHT,
            run_threshold: DEFAULT_RUN_THRESHOLD,
            idle_threshold: DEFAULT_IDLE_THRESHOLD,
            gait_rate_walk: DEFAULT_GAIT_RATE_WALK,
            gait_rate_run: DEFAULT_GAIT_RATE_RUN,
            gait_rate_sneak: DEFAULT_GAIT_RATE_SNEAK,
            segment_length: DEFAULT_SEGMENT_LENGTH,
            trigger_distance: DEFAULT_TRIGGER_DISTANCE,
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            turn_probability: DEFAULT_TURN_PROBABILITY,
            camera_eye_offset: Vec3::new(0.0, 1.2, 3.0),
            camera_look_offset: Vec3::new(0.0, 0.4, -1.5),
            camera_lerp: DEFAULT_CAMERA_LERP,
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
            .map_err(|e| format!("Failed to load config file: {e}"))?;

        let mut float = |section: &str, key: &str, target: &mut f32| {
            if let Ok(Some(v)) = config.getfloat(section, key) {
                *target = v as f32;
            }
        };

        float("movement", "move_speed", &mut self.move_speed);
        float("movement", "sneak_speed", &mut self.sneak_speed);
        float("movement", "turn_speed", &mut self.turn_speed);
        float("movement", "jump_velocity", &mut self.jump_velocity);
        float("movement", "gravity", &mut self.gravity);
        float("movement", "ground_height", &mut self.ground_height);
        float("movement", "run_threshold", &mut self.run_threshold);
        float("movement", "idle_threshold", &mut self.idle_threshold);
        float("gait", "walk_rate", &mut self.gait_rate_walk);
        float("gait", "run_rate", &mut self.gait_rate_run);
        float("gait", "sneak_rate", &mut self.gait_rate_sneak);
        float("street", "segment_length", &mut self.segment_length);
        float("street", "trigger_distance", &mut self.trigger_distance);
        float("street", "turn_probability", &mut self.turn_probability);
        float("camera", "lerp_factor", &mut self.camera_lerp);

        if let Ok(Some(v)) = config.getuint("street", "window_capacity") {
            self.window_capacity = v as usize;
        }

        info!("Loaded simulation config from {:?}", self.config_path);
        Ok(())
    }
}
