//! Game settings and tuning
//!
//! Every gameplay constant can be overridden from a JSON document; missing
//! fields fall back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{border_walls, circle_rect_overlap};

/// Errors raised while loading or validating settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub wall_thickness: f32,

    // === Player ===
    pub player_start_x: f32,
    pub player_start_y: f32,
    pub player_radius: f32,
    /// Speed at full tilt (units per nominal frame)
    pub max_speed: f32,
    /// Tilt in degrees that maps to `max_speed`
    pub full_tilt_degrees: f32,

    // === Coins ===
    pub coin_radius: f32,
    pub spawn_margin: f32,
    pub spawn_clearance: f32,
    pub max_spawn_attempts: u32,
    pub initial_coins: usize,

    // === Timing ===
    /// Frame duration (ms) that one unit of `dt` stands for
    pub nominal_frame_ms: f64,

    /// RNG seed; `None` uses [`DEFAULT_SEED`]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            wall_thickness: WALL_THICKNESS,

            player_start_x: PLAYER_START_X,
            player_start_y: PLAYER_START_Y,
            player_radius: PLAYER_RADIUS,
            max_speed: MAX_SPEED,
            full_tilt_degrees: FULL_TILT_DEGREES,

            coin_radius: COIN_RADIUS,
            spawn_margin: SPAWN_MARGIN,
            spawn_clearance: SPAWN_CLEARANCE,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            initial_coins: INITIAL_COINS,

            nominal_frame_ms: NOMINAL_FRAME_MS,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!("Loaded settings (seed: {:?})", settings.seed);
        Ok(settings)
    }

    /// Same settings with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Effective RNG seed
    pub fn seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    /// Check that the settings describe a playable layout
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("playfield_width", self.playfield_width)?;
        positive("playfield_height", self.playfield_height)?;
        positive("player_radius", self.player_radius)?;
        positive("max_speed", self.max_speed)?;
        positive("full_tilt_degrees", self.full_tilt_degrees)?;
        positive("coin_radius", self.coin_radius)?;
        non_negative("wall_thickness", self.wall_thickness)?;
        non_negative("spawn_margin", self.spawn_margin)?;
        non_negative("spawn_clearance", self.spawn_clearance)?;

        if !(self.nominal_frame_ms.is_finite() && self.nominal_frame_ms > 0.0) {
            return Err(invalid(
                "nominal_frame_ms",
                format!("must be a positive number, got {}", self.nominal_frame_ms),
            ));
        }

        // Coins are drawn from [margin, dim - margin)
        if self.spawn_margin * 2.0 >= self.playfield_width {
            return Err(invalid(
                "spawn_margin",
                format!("leaves no room across a width of {}", self.playfield_width),
            ));
        }
        if self.spawn_margin * 2.0 >= self.playfield_height {
            return Err(invalid(
                "spawn_margin",
                format!("leaves no room across a height of {}", self.playfield_height),
            ));
        }

        let r = self.player_radius;
        if !(r..=self.playfield_width - r).contains(&self.player_start_x) {
            return Err(invalid(
                "player_start_x",
                format!("{} puts the player outside the playfield", self.player_start_x),
            ));
        }
        if !(r..=self.playfield_height - r).contains(&self.player_start_y) {
            return Err(invalid(
                "player_start_y",
                format!("{} puts the player outside the playfield", self.player_start_y),
            ));
        }

        let start = glam::Vec2::new(self.player_start_x, self.player_start_y);
        let walls = border_walls(self.playfield_width, self.playfield_height, self.wall_thickness);
        if walls.iter().any(|wall| circle_rect_overlap(start, r, wall)) {
            return Err(invalid(
                "player_start",
                format!("({}, {}) overlaps a border wall", start.x, start.y),
            ));
        }

        if self.max_spawn_attempts == 0 {
            return Err(invalid("max_spawn_attempts", "must be at least 1".into()));
        }
        if self.initial_coins == 0 {
            return Err(invalid("initial_coins", "must be at least 1".into()));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be a positive number, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be zero or more, got {value}")))
    }
}
