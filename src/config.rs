//! Game tuning
//!
//! Every knob the simulation reads lives here so game feel can be adjusted
//! without touching logic. Defaults reproduce the shipped balance.

use serde::{Deserialize, Serialize};

/// Tunable game configuration
///
/// Rates are divisors in milliseconds per unit: a stick grows by
/// `elapsed_ms / stretching_rate` world units per frame, so smaller means
/// faster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// World/canvas width in units
    pub world_width: f32,
    /// World/canvas height in units
    pub world_height: f32,
    /// Height of the platform band at the bottom of the world
    pub platform_height: f32,

    /// Stick growth, ms per unit of length
    pub stretching_rate: f32,
    /// Stick rotation, ms per degree
    pub turning_rate: f32,
    /// Hero walk, ms per unit
    pub walking_rate: f32,
    /// Camera catch-up, ms per unit
    pub transitioning_rate: f32,
    /// Hero fall, ms per unit
    pub falling_rate: f32,

    /// Smallest gap generated between platforms (inclusive)
    pub min_gap: f32,
    /// Largest gap generated between platforms (exclusive)
    pub max_gap: f32,
    /// Smallest generated platform width (inclusive)
    pub min_width: f32,
    /// Largest generated platform width (exclusive)
    pub max_width: f32,

    /// Hero width as the position formulas see it
    pub hero_width: f32,
    /// Hero height, read by the presentation layer
    pub hero_height: f32,

    /// Optional cap on a single frame's elapsed time. `None` keeps the
    /// original behavior: a long stall between frames produces one large
    /// simulation jump instead of smooth interpolation.
    pub max_frame_ms: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_width: 375.0,
            world_height: 375.0,
            platform_height: 100.0,

            stretching_rate: 4.0,
            turning_rate: 4.0,
            walking_rate: 4.0,
            transitioning_rate: 2.0,
            falling_rate: 2.0,

            min_gap: 40.0,
            max_gap: 200.0,
            min_width: 20.0,
            max_width: 100.0,

            hero_width: 30.0,
            hero_height: 30.0,

            max_frame_ms: None,
        }
    }
}

impl Config {
    /// All rates positive, random ranges non-empty, dimensions positive
    pub fn is_valid(&self) -> bool {
        self.world_width > 0.0
            && self.world_height > 0.0
            && self.platform_height > 0.0
            && self.stretching_rate > 0.0
            && self.turning_rate > 0.0
            && self.walking_rate > 0.0
            && self.transitioning_rate > 0.0
            && self.falling_rate > 0.0
            && self.min_gap < self.max_gap
            && self.min_gap > 0.0
            && self.min_width < self.max_width
            && self.min_width > 0.0
            && self.hero_width > 0.0
            && self.hero_height > 0.0
            && self.max_frame_ms.is_none_or(|cap| cap > 0.0)
    }

    /// Load config from a JSON file, falling back to defaults on any
    /// missing file, parse error, or invalid ranges.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(config) if config.is_valid() => {
                    log::info!("Loaded config from {path}");
                    config
                }
                Ok(_) => {
                    log::warn!("Config in {path} has invalid ranges, using defaults");
                    Self::default()
                }
                Err(err) => {
                    log::warn!("Failed to parse {path}: {err}, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {path}, using defaults");
                Self::default()
            }
        }
    }
}
