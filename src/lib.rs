//! geofence-rs
//!
//! Umbrella crate for the workspace. Re-exports [`geofence_core`] so the
//! demos under `demos/` and downstream users can depend on a single name.

pub use geofence_core::*;
