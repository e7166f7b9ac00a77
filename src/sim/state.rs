//! Game state and core simulation types
//!
//! Everything the step function reads or writes lives in [`GameState`];
//! nothing is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Rect;
use super::spawn::{SpawnError, spawn_coin};
use crate::settings::{ConfigError, Settings};

/// Why a session couldn't be created
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}

/// Static border strip. Walls never move after startup.
pub type Wall = Rect;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Sensor not yet authorized - ticks are no-ops
    #[default]
    NotStarted,
    /// Tilt drives the player
    Running,
}

/// Device tilt in degrees (x from gamma, y from beta)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Tilt {
    pub x: f32,
    pub y: f32,
}

impl Tilt {
    pub const LEVEL: Tilt = Tilt { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The player-controlled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Always false while the coin is in the active set
    pub collected: bool,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A coin was picked up and replaced
    CoinCollected {
        coin_id: u32,
        replacement_id: u32,
        score: u64,
    },
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub width: f32,
    pub height: f32,
    pub walls: Vec<Wall>,
    pub player: Player,
    pub coins: Vec<Coin>,
    pub score: u64,
    pub phase: SessionPhase,
}

/// The four border strips: top, bottom, left, right
pub fn border_walls(width: f32, height: f32, thickness: f32) -> Vec<Wall> {
    vec![
        Rect::new(0.0, 0.0, width, thickness),
        Rect::new(0.0, height - thickness, width, thickness),
        Rect::new(0.0, 0.0, thickness, height),
        Rect::new(width - thickness, 0.0, thickness, height),
    ]
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning this session was created with
    pub settings: Settings,
    /// Static walls
    pub walls: Vec<Wall>,
    pub player: Player,
    /// Active coins (sorted by id)
    pub coins: Vec<Coin>,
    /// Coins collected so far
    pub score: u64,
    pub phase: SessionPhase,
    /// Running ticks processed
    pub frame: u64,
    /// Coin placement RNG
    pub rng: Pcg32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Build a fresh session: walls, player at its start position and the
    /// initial coins. Settings are validated first.
    pub fn new(settings: Settings) -> Result<Self, GameError> {
        settings.validate()?;

        let walls = border_walls(
            settings.playfield_width,
            settings.playfield_height,
            settings.wall_thickness,
        );
        let player = Player {
            pos: Vec2::new(settings.player_start_x, settings.player_start_y),
            radius: settings.player_radius,
        };
        let rng = Pcg32::seed_from_u64(settings.seed());
        let initial_coins = settings.initial_coins;

        let mut state = Self {
            settings,
            walls,
            player,
            coins: Vec::with_capacity(initial_coins),
            score: 0,
            phase: SessionPhase::NotStarted,
            frame: 0,
            rng,
            next_id: 1,
        };

        for _ in 0..initial_coins {
            spawn_coin(&mut state)?;
        }

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin reacting to tilt. Only the first call has an effect.
    pub fn start(&mut self) {
        if self.phase == SessionPhase::NotStarted {
            self.phase = SessionPhase::Running;
            log::info!("Session started");
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Player center must stay inside this rectangle
    pub fn clamp_bounds(&self) -> (Vec2, Vec2) {
        let r = self.player.radius;
        (
            Vec2::splat(r),
            Vec2::new(
                self.settings.playfield_width - r,
                self.settings.playfield_height - r,
            ),
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.settings.playfield_width,
            height: self.settings.playfield_height,
            walls: self.walls.clone(),
            player: self.player,
            coins: self.coins.clone(),
            score: self.score,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_border_walls_layout() {
        let walls = border_walls(400.0, 600.0, 10.0);
        assert_eq!(walls.len(), 4);
        assert_eq!(walls[0], Rect::new(0.0, 0.0, 400.0, 10.0));
        assert_eq!(walls[1], Rect::new(0.0, 590.0, 400.0, 10.0));
        assert_eq!(walls[2], Rect::new(0.0, 0.0, 10.0, 600.0));
        assert_eq!(walls[3], Rect::new(390.0, 0.0, 10.0, 600.0));
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(Settings::default()).unwrap();
        assert_eq!(state.phase, SessionPhase::NotStarted);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_START_X, PLAYER_START_Y));
        assert_eq!(state.player.radius, PLAYER_RADIUS);
        assert_eq!(state.coins.len(), INITIAL_COINS);
        assert_eq!(state.score, 0);
        assert!(state.coins.iter().all(|c| !c.collected));
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = Settings {
            spawn_margin: 300.0,
            ..Default::default()
        };
        let err = GameState::new(settings).unwrap_err();
        assert!(matches!(
            err,
            GameError::Config(ConfigError::Invalid { field: "spawn_margin", .. })
        ));

        let settings = Settings {
            playfield_height: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            GameState::new(settings),
            Err(GameError::Config(_))
        ));
    }

    #[test]
    fn test_start_is_one_way() {
        let mut state = GameState::new(Settings::default()).unwrap();
        state.start();
        assert!(state.is_running());
        state.start();
        assert_eq!(state.phase, SessionPhase::Running);
    }

    #[test]
    fn test_same_seed_same_coins() {
        let a = GameState::new(Settings::default().with_seed(7)).unwrap();
        let b = GameState::new(Settings::default().with_seed(7)).unwrap();
        assert_eq!(a.coins, b.coins);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let state = GameState::new(Settings::default()).unwrap();
        let snap = state.snapshot();
        assert_eq!(snap.walls, state.walls);
        assert_eq!(snap.coins, state.coins);
        assert_eq!(snap.player, state.player);
        assert_eq!(snap.width, PLAYFIELD_WIDTH);

        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"score\":0"));
    }
}
