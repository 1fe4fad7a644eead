//! Fundamental geometric and simulation types.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Geographic position: degrees of longitude/latitude, altitude in feet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPos {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub alt_ft: f64,
}

impl GeoPos {
    pub fn new(lon_deg: f64, lat_deg: f64, alt_ft: f64) -> Self {
        Self {
            lon_deg,
            lat_deg,
            alt_ft,
        }
    }

    /// True when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.lon_deg.is_finite() && self.lat_deg.is_finite() && self.alt_ft.is_finite()
    }
}

/// Simulation time under a variable timestep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Tick counter (increments by 1 each advancing tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Normalize an angle into [0, 2π).
pub fn normalize_heading(rad: f64) -> f64 {
    rad.rem_euclid(TAU)
}

/// Shortest signed arc from `from` to `to`, in (−π, π].
///
/// An exactly-opposite target resolves to +π, so the turn direction at the
/// boundary is deterministic (counter-clockwise, never zero).
pub fn shortest_arc(from: f64, to: f64) -> f64 {
    let delta = (to - from).rem_euclid(TAU);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

/// Convert a compass bearing (degrees, clockwise from north) into the
/// internal mathematical heading (radians, counter-clockwise from east).
///
/// The `(90 − bearing) mod 360` form is the external command contract and
/// must not be reinterpreted.
pub fn bearing_to_heading(bearing_deg: f64) -> f64 {
    (90.0 - bearing_deg).rem_euclid(360.0).to_radians()
}
