//! Aircraft state, setpoints, and performance envelope.
//!
//! Plain data structs; the per-tick logic lives in the sim crate's systems.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::types::GeoPos;

/// Heading control sub-state.
///
/// `Target` overrides rate-based turning and reverts to `Rate(0.0)` once
/// the target heading has been reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HeadingCommand {
    /// Continuous turn at the given rate (rad/s), clamped by the envelope.
    Rate(f64),
    /// Converge on an absolute heading (radians, mathematical convention).
    Target(f64),
}

impl Default for HeadingCommand {
    fn default() -> Self {
        Self::Rate(0.0)
    }
}

/// Performance envelope. Fixed at creation, never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Max horizontal acceleration (knots/s).
    pub max_accel: f64,
    /// Max turn rate (rad/s).
    pub max_turn_rate: f64,
    /// Max climb/descent rate (ft/min).
    pub max_climb_rate: f64,
}

/// One simulated aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Stable identity, used as the external addressing key.
    pub id: u32,
    pub pos: GeoPos,
    /// Horizontal velocity in knots (x = east, y = north). Vertical motion
    /// is carried by altitude deltas, not integrated through a velocity.
    pub vel: DVec2,
    /// Heading in radians, mathematical convention (0 = east, CCW),
    /// normalized to [0, 2π).
    pub heading: f64,
    /// Target speed setpoint (knots).
    pub target_speed: f64,
    /// Target altitude setpoint (feet).
    pub target_alt: f64,
    pub heading_cmd: HeadingCommand,
    pub perf: Performance,
    /// Output of the last detection pass.
    pub detected: bool,
}

impl Aircraft {
    /// Current horizontal speed (knots).
    pub fn speed(&self) -> f64 {
        self.vel.length()
    }

    /// True when every kinematic field is finite.
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite() && self.heading.is_finite()
    }
}
