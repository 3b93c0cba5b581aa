//! Game balance configuration
//!
//! Every tunable lives here so balance can be overridden with a JSON blob
//! without touching the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{ENEMY_HEIGHT, ENEMY_WIDTH, PLAYER_BOTTOM_OFFSET, PLAYER_HEIGHT, PLAYER_WIDTH};

/// Errors produced while loading or validating a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON override could not be parsed
    Parse(serde_json::Error),
    /// Canvas too small to hold the player and an enemy
    CanvasTooSmall { width: f32, height: f32 },
    /// A probability outside `[0, 1]`
    InvalidProbability { field: &'static str, value: f32 },
    /// Cooldown floor is above the starting cooldown (or negative)
    InvalidCooldown { base_ms: f64, min_ms: f64 },
    /// A run must start with at least one life
    NoLives,
    /// Level thresholds would all be zero
    NoLevelProgression,
    /// Frame delta cap must be a positive number of milliseconds
    InvalidFrameDelta { max_ms: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::CanvasTooSmall { width, height } => {
                write!(f, "canvas {width}x{height} is too small for the ships")
            }
            Self::InvalidProbability { field, value } => {
                write!(f, "{field} must be within [0, 1], got {value}")
            }
            Self::InvalidCooldown { base_ms, min_ms } => {
                write!(f, "fire cooldown floor {min_ms}ms must be within [0, {base_ms}ms]")
            }
            Self::NoLives => write!(f, "starting_lives must be at least 1"),
            Self::NoLevelProgression => write!(f, "points_per_level must be at least 1"),
            Self::InvalidFrameDelta { max_ms } => {
                write!(f, "max_frame_delta_ms must be positive, got {max_ms}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Tunable game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    pub starting_lives: u32,
    /// Horizontal pixels per tick
    pub player_speed: f32,
    /// Speed gained per level
    pub player_speed_step: f32,
    pub player_max_speed: f32,
    pub fire_cooldown_ms: f64,
    /// Cooldown removed by each speed power-up
    pub fire_cooldown_step_ms: f64,
    pub min_fire_cooldown_ms: f64,

    // === Enemies ===
    pub enemy_base_speed: f32,
    pub enemy_speed_per_level: f32,
    /// Per enemy, per tick, multiplied by the level
    pub enemy_fire_chance_per_level: f32,

    // === Progression ===
    pub power_up_drop_chance: f32,
    /// Level N ends once the score reaches `N × points_per_level`
    pub points_per_level: u64,

    // === Frame driver ===
    /// Upper bound on a single simulated frame delta
    pub max_frame_delta_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,

            starting_lives: 3,
            player_speed: 6.0,
            player_speed_step: 0.5,
            player_max_speed: 8.0,
            fire_cooldown_ms: 300.0,
            fire_cooldown_step_ms: 50.0,
            min_fire_cooldown_ms: 100.0,

            enemy_base_speed: 1.0,
            enemy_speed_per_level: 0.2,
            enemy_fire_chance_per_level: 0.002,

            power_up_drop_chance: 0.2,
            points_per_level: 1000,

            max_frame_delta_ms: 100.0,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min_width = PLAYER_WIDTH.max(ENEMY_WIDTH);
        let min_height = (PLAYER_BOTTOM_OFFSET.max(PLAYER_HEIGHT)).max(ENEMY_HEIGHT);
        if !(self.canvas_width >= min_width && self.canvas_height >= min_height) {
            return Err(ConfigError::CanvasTooSmall {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        for (field, value) in [
            ("power_up_drop_chance", self.power_up_drop_chance),
            ("enemy_fire_chance_per_level", self.enemy_fire_chance_per_level),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { field, value });
            }
        }

        if !(self.min_fire_cooldown_ms >= 0.0 && self.min_fire_cooldown_ms <= self.fire_cooldown_ms)
        {
            return Err(ConfigError::InvalidCooldown {
                base_ms: self.fire_cooldown_ms,
                min_ms: self.min_fire_cooldown_ms,
            });
        }

        if self.starting_lives == 0 {
            return Err(ConfigError::NoLives);
        }

        if self.points_per_level == 0 {
            return Err(ConfigError::NoLevelProgression);
        }

        if !(self.max_frame_delta_ms.is_finite() && self.max_frame_delta_ms > 0.0) {
            return Err(ConfigError::InvalidFrameDelta {
                max_ms: self.max_frame_delta_ms,
            });
        }

        Ok(())
    }

    /// Enemy descent speed at a given level
    pub fn enemy_speed(&self, level: u32) -> f32 {
        self.enemy_base_speed + level as f32 * self.enemy_speed_per_level
    }

    /// Chance that a single enemy fires during one tick
    pub fn enemy_fire_chance(&self, level: u32) -> f32 {
        self.enemy_fire_chance_per_level * level as f32
    }

    /// Score needed to leave the given level
    pub fn level_threshold(&self, level: u32) -> u64 {
        level as u64 * self.points_per_level
    }
}
