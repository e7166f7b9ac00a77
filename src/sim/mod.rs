//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (coins sorted by entity ID)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{Rect, circle_rect_overlap, circles_overlap, sweep_rect_overlap};
pub use spawn::{SpawnError, find_spawn_position, spawn_coin};
pub use state::{
    Coin, GameError, GameEvent, GameState, Player, SessionPhase, Snapshot, Tilt, Wall, border_walls,
};
pub use tick::{TickInput, tick, tilt_velocity};
