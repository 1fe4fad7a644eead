//! Snapshot system: builds the published airspace picture.
//!
//! Read-only over the store. Only aircraft flagged by the detection pass
//! are published; everything else stays off the picture.

use airwatch_core::state::{AircraftView, AirspaceSnapshot, TickStats};
use airwatch_core::types::SimTime;

use crate::store::Fleet;

/// Build the snapshot for the tick that just completed.
pub fn build(fleet: &Fleet, time: &SimTime, stats: TickStats) -> AirspaceSnapshot {
    let mut aircraft: Vec<AircraftView> = fleet
        .iter()
        .filter(|a| a.detected)
        .map(|a| AircraftView {
            id: a.id,
            lon: a.pos.lon_deg,
            lat: a.pos.lat_deg,
            alt: a.pos.alt_ft,
            heading: a.heading,
            detected: a.detected,
        })
        .collect();

    aircraft.sort_by_key(|view| view.id);

    AirspaceSnapshot {
        time: *time,
        aircraft,
        stats,
    }
}
