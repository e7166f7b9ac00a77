//! Tilt Coins - a tilt-controlled coin collection game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, wall collisions, coin pickups)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Sensor adapter and frame clock
//! - `settings`: Data-driven game tuning
//! - `ui`: Status text shown next to the playfield

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{ConfigError, Settings};
pub use ui::Status;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas units)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;
    /// Thickness of the four border strips
    pub const WALL_THICKNESS: f32 = 10.0;

    /// Player defaults - starts in the bottom-left corner
    pub const PLAYER_START_X: f32 = 40.0;
    pub const PLAYER_START_Y: f32 = 560.0;
    pub const PLAYER_RADIUS: f32 = 10.0;

    /// Coin defaults
    pub const COIN_RADIUS: f32 = 8.0;
    /// Coins never spawn closer than this to the canvas edge
    pub const SPAWN_MARGIN: f32 = 20.0;
    /// Extra clearance between a fresh coin and any wall
    pub const SPAWN_CLEARANCE: f32 = 2.0;
    /// Rejection sampling cap before the layout is declared unusable
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
    /// Coins on the field at any time
    pub const INITIAL_COINS: usize = 1;

    /// Speed at full tilt, in units per nominal frame
    pub const MAX_SPEED: f32 = 4.0;
    /// Tilt angle (degrees) that maps to MAX_SPEED
    pub const FULL_TILT_DEGREES: f32 = 45.0;
    /// Nominal frame duration the tuning constants are expressed in (60 Hz)
    pub const NOMINAL_FRAME_MS: f64 = 16.67;

    /// Seed used when the settings don't provide one
    pub const DEFAULT_SEED: u64 = 0x7117_c015;
}
