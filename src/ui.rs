//! Status line shown under the playfield

use std::fmt;

use crate::platform::SensorError;
use crate::sim::{GameState, SessionPhase};

/// What the status line currently reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    NotStarted,
    PermissionDenied,
    SensorError,
    Collected(u64),
}

impl Status {
    /// Status for a session, given the last sensor failure (if any).
    ///
    /// A running session always reports its score; failures only show while
    /// the session is still waiting to start.
    pub fn for_state(state: &GameState, sensor_error: Option<&SensorError>) -> Self {
        match (state.phase, sensor_error) {
            (SessionPhase::Running, _) => Status::Collected(state.score),
            (SessionPhase::NotStarted, Some(SensorError::PermissionDenied)) => {
                Status::PermissionDenied
            }
            (SessionPhase::NotStarted, Some(SensorError::Unavailable(_))) => Status::SensorError,
            (SessionPhase::NotStarted, None) => Status::NotStarted,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NotStarted => f.write_str("not started"),
            Status::PermissionDenied => f.write_str("permission denied"),
            Status::SensorError => f.write_str("sensor error"),
            Status::Collected(n) => write!(f, "collected {} coins", n),
        }
    }
}
