//! Spawn factories for the default world.
//!
//! Builds the initial fleet and sensor field from a seeded RNG, so a given
//! `SimConfig::seed` always produces the same world.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use airwatch_core::aircraft::{Aircraft, HeadingCommand, Performance};
use airwatch_core::constants::*;
use airwatch_core::sensors::Sensor;
use airwatch_core::types::GeoPos;

use crate::store::Fleet;

/// Spawn `count` aircraft spread over the default operating box, cruising
/// at the initial speed on random headings.
pub fn spawn_fleet(rng: &mut ChaCha8Rng, count: usize) -> Fleet {
    let mut aircraft = Vec::with_capacity(count);
    for id in 0..count {
        let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = INITIAL_SPEED_KNOTS;

        aircraft.push(Aircraft {
            id: id as u32,
            pos: GeoPos::new(
                rng.gen_range(FLEET_LON_MIN..FLEET_LON_MAX),
                rng.gen_range(FLEET_LAT_MIN..FLEET_LAT_MAX),
                INITIAL_ALTITUDE_FT,
            ),
            vel: DVec2::new(speed * heading.cos(), speed * heading.sin()),
            heading,
            target_speed: speed,
            target_alt: INITIAL_ALTITUDE_FT,
            heading_cmd: HeadingCommand::default(),
            perf: Performance {
                max_accel: rng.gen_range(ACCEL_LIMIT_MIN..ACCEL_LIMIT_MAX),
                max_turn_rate: rng.gen_range(TURN_LIMIT_MIN..TURN_LIMIT_MAX),
                max_climb_rate: rng.gen_range(CLIMB_LIMIT_MIN..CLIMB_LIMIT_MAX),
            },
            detected: false,
        });
    }
    Fleet::from_aircraft(aircraft)
}

/// Generate `count` fixed sensor sites sharing one detection range.
pub fn sensor_field(rng: &mut ChaCha8Rng, count: usize, range_km: f64) -> Vec<Sensor> {
    (0..count)
        .map(|_| {
            Sensor::new(
                rng.gen_range(SENSOR_LON_MIN..SENSOR_LON_MAX),
                rng.gen_range(SENSOR_LAT_MIN..SENSOR_LAT_MAX),
                range_km,
            )
        })
        .collect()
}
