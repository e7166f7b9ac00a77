//! Platform abstraction layer
//!
//! Host-facing pieces that stay testable without a browser:
//! - Orientation readings and the tilt slot the sensor callback writes to
//! - Permission responses
//! - Frame timing

pub mod clock;
pub mod orientation;

pub use clock::FrameClock;
pub use orientation::{
    OrientationReading, PermissionState, SensorError, TiltSlot, check_permission,
};
