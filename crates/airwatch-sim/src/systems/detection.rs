//! Sensor detection pass.
//!
//! Classifies each aircraft against the fixed sensor field using a local
//! flat projection. Runs after motion integration so every aircraft is
//! tested at its post-update position.

use glam::DVec2;
use rayon::prelude::*;

use airwatch_core::constants::{KM_PER_DEG_LAT, LON_SCALE_FLOOR};
use airwatch_core::sensors::Sensor;
use airwatch_core::types::GeoPos;

use crate::store::Fleet;

/// Run the detection pass over all aircraft.
pub fn run(fleet: &mut Fleet, sensors: &[Sensor]) {
    fleet.as_mut_slice().par_iter_mut().for_each(|aircraft| {
        aircraft.detected = detect_one(&aircraft.pos, sensors);
    });
}

/// True when at least one sensor sees the position. Short-circuits on the
/// first sensor in range; the result does not depend on sensor order.
pub fn detect_one(pos: &GeoPos, sensors: &[Sensor]) -> bool {
    let mut km_per_deg_lon = KM_PER_DEG_LAT * pos.lat_deg.to_radians().cos();
    if km_per_deg_lon <= 0.0 {
        // cos(lat) collapses past ±90°; keep the scale strictly positive.
        km_per_deg_lon = KM_PER_DEG_LAT * LON_SCALE_FLOOR;
    }
    sensors.iter().any(|sensor| {
        let offset_km = DVec2::new(
            (sensor.lon_deg - pos.lon_deg) * km_per_deg_lon,
            (sensor.lat_deg - pos.lat_deg) * KM_PER_DEG_LAT,
        );
        offset_km.length() <= sensor.range_km
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_aircraft_detected() {
        let sensors = [Sensor::new(0.0, 0.0, 250.0)];
        // 0.01° of latitude is roughly 1.1 km.
        assert!(detect_one(&GeoPos::new(0.0, 0.01, 10_000.0), &sensors));
    }

    #[test]
    fn test_distant_aircraft_not_detected() {
        let sensors = [Sensor::new(0.0, 0.0, 250.0)];
        // 5° of latitude is roughly 557 km, well outside a 250 km range.
        assert!(!detect_one(&GeoPos::new(0.0, 5.0, 10_000.0), &sensors));
    }

    #[test]
    fn test_range_boundary() {
        let sensors = [Sensor::new(0.0, 0.0, 250.0)];
        // 2° of latitude ≈ 222.6 km: inside. 2.3° ≈ 256 km: outside.
        assert!(detect_one(&GeoPos::new(0.0, 2.0, 0.0), &sensors));
        assert!(!detect_one(&GeoPos::new(0.0, 2.3, 0.0), &sensors));
    }

    #[test]
    fn test_longitude_scale_shrinks_with_latitude() {
        // 3° of longitude at the equator ≈ 334 km (undetected), but at 60°
        // latitude the same offset is ≈ 167 km (detected).
        let equator = [Sensor::new(3.0, 0.0, 250.0)];
        assert!(!detect_one(&GeoPos::new(0.0, 0.0, 0.0), &equator));

        let high_lat = [Sensor::new(3.0, 60.0, 250.0)];
        assert!(detect_one(&GeoPos::new(0.0, 60.0, 0.0), &high_lat));
    }

    #[test]
    fn test_sensor_order_does_not_matter() {
        let near = Sensor::new(100.0, -5.0, 250.0);
        let far = Sensor::new(130.0, 5.0, 250.0);
        let pos = GeoPos::new(100.1, -5.1, 10_000.0);

        assert_eq!(
            detect_one(&pos, &[near, far]),
            detect_one(&pos, &[far, near])
        );

        let nowhere = GeoPos::new(60.0, 40.0, 10_000.0);
        assert_eq!(
            detect_one(&nowhere, &[near, far]),
            detect_one(&nowhere, &[far, near])
        );
    }

    #[test]
    fn test_polar_latitude_stays_finite() {
        let sensors = [Sensor::new(10.0, 89.0, 250.0)];
        // cos(lat) near ±90° must not produce NaN or a zero scale.
        let flag = detect_one(&GeoPos::new(0.0, 90.0, 10_000.0), &sensors);
        // ~1° of latitude away: within range regardless of lon scale.
        assert!(flag);

        // Past the pole the cosine goes negative; the floored scale makes
        // any longitude offset enormous, so only the latitude term counts.
        let past_pole = GeoPos::new(10.0, 92.0, 10_000.0);
        let sensors = [Sensor::new(10.0, 91.0, 250.0)];
        assert!(detect_one(&past_pole, &sensors));
    }

    #[test]
    fn test_empty_sensor_field() {
        assert!(!detect_one(&GeoPos::new(0.0, 0.0, 0.0), &[]));
    }
}
