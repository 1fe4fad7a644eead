//! Motion integration system.
//!
//! Converts speed/heading/altitude setpoints into rate-limited state
//! changes under a variable timestep. Each aircraft updates independently
//! with no shared state, so the pass runs as a rayon parallel iteration.

use glam::DVec2;
use rayon::prelude::*;

use airwatch_core::aircraft::{Aircraft, HeadingCommand};
use airwatch_core::constants::KNOTS_TO_DEG_PER_SEC;
use airwatch_core::types::{normalize_heading, shortest_arc};

use crate::store::Fleet;

/// Run the motion pass over all aircraft. Returns the number of aircraft
/// rolled back after producing a non-finite state.
pub fn run(fleet: &mut Fleet, dt: f64) -> u32 {
    fleet
        .as_mut_slice()
        .par_iter_mut()
        .map(|aircraft| u32::from(update(aircraft, dt)))
        .sum()
}

/// Advance one aircraft by `dt` seconds (`dt` ≥ 0).
///
/// Returns true when the update produced a non-finite state and the
/// aircraft was rolled back to its pre-update state.
pub fn update(aircraft: &mut Aircraft, dt: f64) -> bool {
    let prev = *aircraft;

    // Speed control: converge on the target at most max_accel knots/s.
    let speed = aircraft.vel.length();
    let max_dv = aircraft.perf.max_accel * dt;
    let mut delta_v = aircraft.target_speed - speed;
    if delta_v.abs() > max_dv {
        delta_v = max_dv.copysign(delta_v);
    }
    let new_speed = speed + delta_v;

    // Altitude control: direct update, max_climb_rate is ft/min.
    let max_dalt = aircraft.perf.max_climb_rate / 60.0 * dt;
    let mut delta_alt = aircraft.target_alt - aircraft.pos.alt_ft;
    if delta_alt.abs() > max_dalt {
        delta_alt = max_dalt.copysign(delta_alt);
    }
    aircraft.pos.alt_ft += delta_alt;

    // Heading control.
    let max_dh = aircraft.perf.max_turn_rate * dt;
    aircraft.heading = match aircraft.heading_cmd {
        HeadingCommand::Target(target) => {
            let current = normalize_heading(aircraft.heading);
            let target = normalize_heading(target);
            let delta = shortest_arc(current, target);
            if delta.abs() <= max_dh {
                // Within one tick's turn authority: snap exactly and
                // revert to rate mode.
                aircraft.heading_cmd = HeadingCommand::Rate(0.0);
                target
            } else {
                normalize_heading(current + max_dh.copysign(delta))
            }
        }
        HeadingCommand::Rate(rate) => {
            let mut delta = rate * dt;
            if delta.abs() > max_dh {
                delta = max_dh.copysign(delta);
            }
            normalize_heading(aircraft.heading + delta)
        }
    };

    // Velocity reconstruction and position integration.
    aircraft.vel = DVec2::new(
        new_speed * aircraft.heading.cos(),
        new_speed * aircraft.heading.sin(),
    );
    aircraft.pos.lon_deg += aircraft.vel.x * dt * KNOTS_TO_DEG_PER_SEC;
    aircraft.pos.lat_deg += aircraft.vel.y * dt * KNOTS_TO_DEG_PER_SEC;

    if aircraft.is_finite() {
        false
    } else {
        // One corrupt aircraft must not poison the pass: restore the
        // last-known-good state and report the fault.
        *aircraft = prev;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwatch_core::aircraft::Performance;
    use airwatch_core::types::GeoPos;
    use std::f64::consts::PI;

    fn plane() -> Aircraft {
        Aircraft {
            id: 0,
            pos: GeoPos::new(0.0, 0.0, 10_000.0),
            vel: DVec2::ZERO,
            heading: 0.0,
            target_speed: 0.0,
            target_alt: 10_000.0,
            heading_cmd: HeadingCommand::default(),
            perf: Performance {
                max_accel: 10.0,
                max_turn_rate: 0.2,
                max_climb_rate: 1500.0,
            },
            detected: false,
        }
    }

    #[test]
    fn test_speed_clamped_by_max_accel() {
        let mut a = plane();
        a.target_speed = 250.0;
        update(&mut a, 1.0);
        assert!(
            (a.speed() - 10.0).abs() < 1e-9,
            "one tick at 10 kn/s should reach 10 kn, got {}",
            a.speed()
        );
    }

    #[test]
    fn test_speed_snaps_when_within_reach() {
        let mut a = plane();
        a.vel = DVec2::new(245.0, 0.0);
        a.target_speed = 250.0;
        update(&mut a, 1.0);
        assert!((a.speed() - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_deceleration_clamped() {
        let mut a = plane();
        a.vel = DVec2::new(300.0, 0.0);
        a.target_speed = 0.0;
        update(&mut a, 1.0);
        assert!((a.speed() - 290.0).abs() < 1e-9);
    }

    #[test]
    fn test_climb_rate_is_per_minute() {
        let mut a = plane();
        a.perf.max_climb_rate = 600.0; // 10 ft/s
        a.target_alt = 20_000.0;
        update(&mut a, 1.0);
        assert!((a.pos.alt_ft - 10_010.0).abs() < 1e-9);

        a.target_alt = 0.0;
        update(&mut a, 0.5);
        assert!((a.pos.alt_ft - 10_005.0).abs() < 1e-9);
    }

    #[test]
    fn test_heading_target_clamped_and_pending() {
        let mut a = plane();
        a.heading_cmd = HeadingCommand::Target(PI);
        update(&mut a, 1.0);
        assert!((a.heading - 0.2).abs() < 1e-9, "heading = {}", a.heading);
        assert_eq!(a.heading_cmd, HeadingCommand::Target(PI));
    }

    #[test]
    fn test_heading_target_snaps_and_reverts_to_rate_mode() {
        let mut a = plane();
        a.heading_cmd = HeadingCommand::Target(0.15);
        update(&mut a, 1.0);
        assert!((a.heading - 0.15).abs() < 1e-12);
        assert_eq!(a.heading_cmd, HeadingCommand::Rate(0.0));

        // A further tick with no new command must not move the heading.
        update(&mut a, 1.0);
        assert!((a.heading - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_target_turns_counter_clockwise() {
        let mut a = plane();
        a.heading = 1.0;
        a.heading_cmd = HeadingCommand::Target(1.0 + PI);
        update(&mut a, 1.0);
        assert!(
            (a.heading - 1.2).abs() < 1e-9,
            "opposite target must turn in the +π direction, got {}",
            a.heading
        );
    }

    #[test]
    fn test_target_reached_across_zero_wrap() {
        let mut a = plane();
        a.heading = 6.2;
        a.heading_cmd = HeadingCommand::Target(0.1);
        update(&mut a, 1.0);
        assert!((a.heading - 0.1).abs() < 1e-9, "heading = {}", a.heading);
        assert_eq!(a.heading_cmd, HeadingCommand::Rate(0.0));
    }

    #[test]
    fn test_rate_mode_clamped() {
        let mut a = plane();
        a.heading_cmd = HeadingCommand::Rate(1.0); // above the 0.2 rad/s limit
        update(&mut a, 1.0);
        assert!((a.heading - 0.2).abs() < 1e-9);

        a.heading_cmd = HeadingCommand::Rate(-0.05);
        update(&mut a, 1.0);
        assert!((a.heading - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_heading_stays_normalized() {
        let mut a = plane();
        a.heading = 6.2;
        a.heading_cmd = HeadingCommand::Rate(0.2);
        update(&mut a, 1.0);
        assert!(a.heading >= 0.0 && a.heading < std::f64::consts::TAU);
        assert!((a.heading - (6.4 - std::f64::consts::TAU)).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_follows_heading() {
        let mut a = plane();
        a.heading = PI / 2.0;
        a.vel = DVec2::new(0.0, 200.0);
        a.target_speed = 200.0;
        update(&mut a, 1.0);
        assert!(a.vel.x.abs() < 1e-9);
        assert!((a.vel.y - 200.0).abs() < 1e-9);
        assert!(a.pos.lon_deg.abs() < 1e-12);
        assert!((a.pos.lat_deg - 200.0 * KNOTS_TO_DEG_PER_SEC).abs() < 1e-12);
    }

    #[test]
    fn test_non_finite_result_rolls_back() {
        let mut a = plane();
        a.vel = DVec2::new(100.0, 0.0);
        a.target_speed = f64::NAN;
        let before = a;

        let fault = update(&mut a, 1.0);
        assert!(fault);
        // The NaN setpoint itself is preserved, so compare the kinematic
        // fields rather than the whole struct.
        assert_eq!(a.pos, before.pos);
        assert_eq!(a.vel, before.vel);
        assert_eq!(a.heading, before.heading);
    }
}
