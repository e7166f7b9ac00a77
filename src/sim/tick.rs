//! Per-frame simulation step
//!
//! Advances the player from the current tilt, resolves wall collisions one
//! axis at a time, clamps to the playfield and handles coin pickups.

use glam::Vec2;

use super::geometry::{circles_overlap, sweep_rect_overlap};
use super::spawn::{SpawnError, spawn_coin};
use super::state::{GameEvent, GameState, Tilt, Wall};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest tilt reading
    pub tilt: Tilt,
}

impl TickInput {
    pub fn new(tilt: Tilt) -> Self {
        Self { tilt }
    }
}

/// Map tilt (degrees) to velocity (units per nominal frame).
///
/// `full_tilt` degrees gives `max_speed`. Steeper tilts are not clamped and
/// keep scaling linearly.
#[inline]
pub fn tilt_velocity(tilt: Tilt, max_speed: f32, full_tilt: f32) -> Vec2 {
    Vec2::new(tilt.x, tilt.y) / full_tilt * max_speed
}

fn path_hits_wall(from: Vec2, to: Vec2, radius: f32, walls: &[Wall]) -> bool {
    walls
        .iter()
        .any(|wall| sweep_rect_overlap(from, to, radius, wall))
}

/// Advance the game state by `dt` nominal frames.
///
/// Does nothing until the session is running. Returns the pickups that
/// happened during this tick.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
) -> Result<Vec<GameEvent>, SpawnError> {
    if !state.is_running() {
        return Ok(Vec::new());
    }

    state.frame += 1;

    let vel = tilt_velocity(
        input.tilt,
        state.settings.max_speed,
        state.settings.full_tilt_degrees,
    );
    move_player(state, vel * dt);
    collect_coins(state)
}

/// Move along x, then along y using the resolved x. A step whose path touches
/// a wall is dropped for that axis only, so long frames can't jump a wall.
fn move_player(state: &mut GameState, delta: Vec2) {
    let radius = state.player.radius;

    let before = state.player.pos;
    let after_x = before + Vec2::new(delta.x, 0.0);
    if !path_hits_wall(before, after_x, radius, &state.walls) {
        state.player.pos = after_x;
    }

    let before = state.player.pos;
    let after_y = before + Vec2::new(0.0, delta.y);
    if !path_hits_wall(before, after_y, radius, &state.walls) {
        state.player.pos = after_y;
    }

    // Keep the whole circle on the playfield
    let (lo, hi) = state.clamp_bounds();
    state.player.pos = state.player.pos.max(lo).min(hi);
}

fn collect_coins(state: &mut GameState) -> Result<Vec<GameEvent>, SpawnError> {
    let mut events = Vec::new();

    // Back to front: removal doesn't shift unvisited coins, and
    // replacements land past the cursor.
    for i in (0..state.coins.len()).rev() {
        let coin = &state.coins[i];
        if !circles_overlap(state.player.pos, state.player.radius, coin.pos, coin.radius) {
            continue;
        }

        // Replace before removing so a failed spawn leaves the set intact
        let replacement_id = spawn_coin(state)?;
        let coin = state.coins.remove(i);
        state.score += 1;

        log::debug!("Coin {} collected, score {}", coin.id, state.score);
        events.push(GameEvent::CoinCollected {
            coin_id: coin.id,
            replacement_id,
            score: state.score,
        });
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::{Coin, SessionPhase};

    /// Running session with a single coin parked far from the player
    fn running_state() -> GameState {
        let mut state = GameState::new(Settings::default().with_seed(12345)).unwrap();
        state.coins[0].pos = Vec2::new(300.0, 100.0);
        state.start();
        state
    }

    #[test]
    fn test_not_started_is_noop() {
        let mut state = GameState::new(Settings::default()).unwrap();
        let before = state.player;
        let coins = state.coins.clone();

        let events = tick(&mut state, &TickInput::new(Tilt::new(45.0, 45.0)), 1.0).unwrap();

        assert!(events.is_empty());
        assert_eq!(state.phase, SessionPhase::NotStarted);
        assert_eq!(state.player, before);
        assert_eq!(state.coins, coins);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn test_full_tilt_moves_max_speed() {
        let mut state = running_state();
        tick(&mut state, &TickInput::new(Tilt::new(45.0, 0.0)), 1.0).unwrap();
        assert_eq!(state.player.pos, Vec2::new(44.0, 560.0));
    }

    #[test]
    fn test_level_tilt_does_not_move() {
        let mut state = running_state();
        for dt in [0.0, 0.5, 1.0, 3.7] {
            tick(&mut state, &TickInput::default(), dt).unwrap();
            assert_eq!(state.player.pos, Vec2::new(40.0, 560.0));
        }
    }

    #[test]
    fn test_tilt_beyond_full_is_not_clamped() {
        let v = tilt_velocity(Tilt::new(90.0, -22.5), 4.0, 45.0);
        assert_eq!(v, Vec2::new(8.0, -2.0));
    }

    #[test]
    fn test_dt_scales_motion() {
        let mut state = running_state();
        tick(&mut state, &TickInput::new(Tilt::new(0.0, -45.0)), 2.5).unwrap();
        assert_eq!(state.player.pos, Vec2::new(40.0, 550.0));
    }

    #[test]
    fn test_wall_rollback_per_axis() {
        let mut state = running_state();
        // 3 units from touching the bottom wall (590 - 10 - 577)
        state.player.pos = Vec2::new(200.0, 577.0);
        tick(&mut state, &TickInput::new(Tilt::new(45.0, 45.0)), 1.0).unwrap();
        // x moves freely, y would overlap the bottom wall and is rolled back
        assert_eq!(state.player.pos, Vec2::new(204.0, 577.0));
    }

    #[test]
    fn test_rollback_keeps_player_against_left_wall() {
        let mut state = running_state();
        state.player.pos = Vec2::new(21.0, 300.0);
        tick(&mut state, &TickInput::new(Tilt::new(-45.0, 0.0)), 1.0).unwrap();
        assert_eq!(state.player.pos.x, 21.0);
    }

    #[test]
    fn test_clamp_without_walls() {
        let mut state = running_state();
        state.walls.clear();
        state.player.pos = Vec2::new(12.0, 300.0);
        tick(&mut state, &TickInput::new(Tilt::new(-90.0, 0.0)), 1.0).unwrap();
        assert_eq!(state.player.pos.x, 10.0);

        state.player.pos = Vec2::new(200.0, 588.0);
        tick(&mut state, &TickInput::new(Tilt::new(0.0, 90.0)), 1.0).unwrap();
        assert_eq!(state.player.pos.y, 590.0);
    }

    #[test]
    fn test_coin_at_threshold_not_collected() {
        let mut state = running_state();
        state.coins[0].pos = state.player.pos + Vec2::new(18.0, 0.0);

        let events = tick(&mut state, &TickInput::default(), 1.0).unwrap();

        assert!(events.is_empty());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_coin_inside_threshold_collected() {
        let mut state = running_state();
        let old_id = state.coins[0].id;
        state.coins[0].pos = state.player.pos + Vec2::new(18.0 * 0.999, 0.0);

        let events = tick(&mut state, &TickInput::default(), 1.0).unwrap();

        assert_eq!(state.score, 1);
        assert_eq!(state.coins.len(), 1);
        assert_ne!(state.coins[0].id, old_id);
        assert_eq!(
            events,
            vec![GameEvent::CoinCollected {
                coin_id: old_id,
                replacement_id: state.coins[0].id,
                score: 1,
            }]
        );
    }

    #[test]
    fn test_multiple_pickups_in_one_tick() {
        let mut state = running_state();
        let pos = state.player.pos;
        for offset in [Vec2::new(5.0, 0.0), Vec2::new(0.0, -5.0)] {
            let id = state.next_entity_id();
            state.coins.push(Coin {
                id,
                pos: pos + offset,
                radius: 8.0,
                collected: false,
            });
        }
        assert_eq!(state.coins.len(), 3);

        let events = tick(&mut state, &TickInput::default(), 1.0).unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(state.score, 2);
        assert_eq!(state.coins.len(), 3);
        assert!(state.coins.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_pickup_propagates_spawn_failure() {
        let mut state = running_state();
        state.settings.max_spawn_attempts = 10;
        state.coins[0].pos = state.player.pos;
        // Fill the whole playfield so no replacement fits
        state.walls.push(Wall::new(0.0, 0.0, 400.0, 600.0));
        // Keep the player still so only the spawn can fail
        let result = tick(&mut state, &TickInput::default(), 1.0);
        assert_eq!(result, Err(SpawnError::Exhausted { attempts: 10 }));
        // The coin that couldn't be replaced is still there
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_long_frame_cannot_jump_wall() {
        let mut state = running_state();
        // 30 nominal frames at -45 degrees is 120 units, far past the left wall
        tick(&mut state, &TickInput::new(Tilt::new(-45.0, 0.0)), 30.0).unwrap();
        assert_eq!(state.player.pos, Vec2::new(40.0, 560.0));

        // Still free to move afterwards
        tick(&mut state, &TickInput::new(Tilt::new(45.0, -45.0)), 1.0).unwrap();
        assert_eq!(state.player.pos, Vec2::new(44.0, 556.0));
    }

    #[test]
    fn test_long_frame_cannot_jump_bottom_wall() {
        let mut state = running_state();
        tick(&mut state, &TickInput::new(Tilt::new(0.0, 45.0)), 40.0).unwrap();
        assert_eq!(state.player.pos.y, 560.0);
        for wall in &state.walls {
            assert!(!crate::sim::circle_rect_overlap(state.player.pos, 10.0, wall));
        }
    }
}
