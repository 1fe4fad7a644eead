//! Airspace snapshot — the read-only picture published after each tick.

use serde::{Deserialize, Serialize};

use crate::types::SimTime;

/// Complete published state for one tick.
///
/// Only aircraft flagged by the detection pass appear; undetected traffic
/// is omitted from the picture.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirspaceSnapshot {
    pub time: SimTime,
    pub aircraft: Vec<AircraftView>,
    pub stats: TickStats,
}

/// One detected aircraft as seen by consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AircraftView {
    pub id: u32,
    pub lon: f64,
    pub lat: f64,
    /// Altitude (feet).
    pub alt: f64,
    /// Heading in radians, mathematical convention.
    pub heading: f64,
    pub detected: bool,
}

/// Per-tick counts of dropped or corrected inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickStats {
    pub commands_applied: u32,
    pub commands_dropped: u32,
    /// Aircraft rolled back after producing a non-finite state.
    pub integration_faults: u32,
    /// True when a negative or non-finite `dt` was coerced to zero.
    pub dt_clamped: bool,
}
