//! Device orientation sensor adapter
//!
//! The sensor callback and the frame loop share a single tilt value. Both run
//! on the same event loop, so a `Cell` is enough; the newest reading wins.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::sim::Tilt;

/// Why the sensor couldn't be used
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    #[error("motion sensor permission denied")]
    PermissionDenied,
    #[error("motion sensor unavailable: {0}")]
    Unavailable(String),
}

/// Raw orientation event. Browsers report `null` for axes they can't measure.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationReading {
    /// Left/right tilt in degrees
    pub gamma: Option<f64>,
    /// Front/back tilt in degrees
    pub beta: Option<f64>,
}

impl OrientationReading {
    pub fn new(gamma: Option<f64>, beta: Option<f64>) -> Self {
        Self { gamma, beta }
    }

    /// gamma drives x, beta drives y; missing or NaN axes read as level
    pub fn to_tilt(&self) -> Tilt {
        Tilt::new(axis(self.gamma), axis(self.beta))
    }
}

fn axis(value: Option<f64>) -> f32 {
    match value {
        Some(v) if !v.is_nan() => v as f32,
        _ => 0.0,
    }
}

/// Single-slot tilt holder shared between the sensor callback and the frame loop
#[derive(Debug, Clone, Default)]
pub struct TiltSlot(Rc<Cell<Tilt>>);

impl TiltSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored tilt
    pub fn store(&self, tilt: Tilt) {
        self.0.set(tilt);
    }

    /// Convert and store a raw reading
    pub fn record(&self, reading: OrientationReading) {
        self.store(reading.to_tilt());
    }

    /// Latest tilt (level until the first reading arrives)
    pub fn load(&self) -> Tilt {
        self.0.get()
    }
}

/// Outcome of a permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionState {
    Granted,
    Denied,
}

impl PermissionState {
    /// Interpret the platform's response string. Anything but "granted" is a denial.
    pub fn from_response(response: &str) -> Self {
        if response.trim().eq_ignore_ascii_case("granted") {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        }
    }
}

/// `Ok` if the response grants sensor access
pub fn check_permission(response: &str) -> Result<(), SensorError> {
    match PermissionState::from_response(response) {
        PermissionState::Granted => Ok(()),
        PermissionState::Denied => {
            log::warn!("Orientation permission denied ({:?})", response);
            Err(SensorError::PermissionDenied)
        }
    }
}
