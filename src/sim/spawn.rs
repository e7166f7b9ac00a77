//! Coin placement by rejection sampling

use std::ops::Range;

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use super::geometry::circle_rect_overlap;
use super::state::{Coin, GameState, Wall};
use crate::settings::Settings;

/// Attempts after which a warning is logged (placement is still going)
const SLOW_SPAWN_ATTEMPTS: u32 = 100;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// Walls leave no room for a coin
    #[error("no free coin position found after {attempts} attempts")]
    Exhausted { attempts: u32 },
    /// Margins leave no band to sample from
    #[error("spawn margin {margin} leaves no room in a {width}x{height} playfield")]
    NoRoom { margin: f32, width: f32, height: f32 },
}

/// Draw candidate positions until one clears every wall.
///
/// Each axis is sampled uniformly from `[margin, dim - margin)`; a candidate is
/// rejected when a circle of `coin_radius + spawn_clearance` touches a wall.
pub fn find_spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    walls: &[Wall],
    settings: &Settings,
) -> Result<Vec2, SpawnError> {
    let margin = settings.spawn_margin;
    let clearance = settings.coin_radius + settings.spawn_clearance;

    let xs = margin..settings.playfield_width - margin;
    let ys = margin..settings.playfield_height - margin;
    let usable = |r: &Range<f32>| r.start.is_finite() && r.end.is_finite() && !r.is_empty();
    if !(usable(&xs) && usable(&ys)) {
        return Err(SpawnError::NoRoom {
            margin,
            width: settings.playfield_width,
            height: settings.playfield_height,
        });
    }

    for attempt in 1..=settings.max_spawn_attempts {
        let candidate = Vec2::new(rng.random_range(xs.clone()), rng.random_range(ys.clone()));

        if !walls
            .iter()
            .any(|wall| circle_rect_overlap(candidate, clearance, wall))
        {
            if attempt > SLOW_SPAWN_ATTEMPTS {
                log::warn!("Coin placement needed {} attempts", attempt);
            }
            return Ok(candidate);
        }
    }

    log::error!(
        "Coin placement failed after {} attempts",
        settings.max_spawn_attempts
    );
    Err(SpawnError::Exhausted {
        attempts: settings.max_spawn_attempts,
    })
}

/// Place a new coin and add it to the active set. Returns its id.
pub fn spawn_coin(state: &mut GameState) -> Result<u32, SpawnError> {
    let pos = find_spawn_position(&mut state.rng, &state.walls, &state.settings)?;
    let id = state.next_entity_id();
    state.coins.push(Coin {
        id,
        pos,
        radius: state.settings.coin_radius,
        collected: false,
    });
    log::debug!("Spawned coin {} at ({:.1}, {:.1})", id, pos.x, pos.y);
    Ok(id)
}
