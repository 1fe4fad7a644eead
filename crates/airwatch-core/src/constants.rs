//! Simulation constants and tuning parameters.

// --- Local flat-earth projection ---

/// Kilometers per degree of latitude.
pub const KM_PER_DEG_LAT: f64 = 111.32;

/// Floor factor for the longitude scale when cos(lat) collapses near the
/// poles. The effective scale never drops below `KM_PER_DEG_LAT * LON_SCALE_FLOOR`.
pub const LON_SCALE_FLOOR: f64 = 1e-6;

/// Degrees of longitude/latitude advanced per knot per second
/// (~1 kt over one second is roughly 0.00015° at these latitudes).
pub const KNOTS_TO_DEG_PER_SEC: f64 = 0.000_15;

// --- Sensor field ---

/// Shared detection range for the default sensor field (km).
pub const SENSOR_RANGE_KM: f64 = 250.0;

/// Number of sensor sites in the default field.
pub const DEFAULT_SENSOR_COUNT: usize = 100;

/// Sensor placement box (degrees).
pub const SENSOR_LON_MIN: f64 = 95.0;
pub const SENSOR_LON_MAX: f64 = 141.0;
pub const SENSOR_LAT_MIN: f64 = -11.0;
pub const SENSOR_LAT_MAX: f64 = 6.0;

// --- Default fleet ---

/// Number of aircraft in the default fleet.
pub const DEFAULT_AIRCRAFT_COUNT: usize = 1000;

/// Fleet spawn box (degrees).
pub const FLEET_LON_MIN: f64 = 94.5;
pub const FLEET_LON_MAX: f64 = 140.0;
pub const FLEET_LAT_MIN: f64 = -9.4;
pub const FLEET_LAT_MAX: f64 = 6.0;

/// Initial cruise speed (knots).
pub const INITIAL_SPEED_KNOTS: f64 = 250.0;

/// Initial cruise altitude (feet).
pub const INITIAL_ALTITUDE_FT: f64 = 10_000.0;

// --- Performance envelope spawn ranges ---

/// Max horizontal acceleration (knots/s).
pub const ACCEL_LIMIT_MIN: f64 = 5.0;
pub const ACCEL_LIMIT_MAX: f64 = 20.0;

/// Max turn rate (rad/s).
pub const TURN_LIMIT_MIN: f64 = 0.1;
pub const TURN_LIMIT_MAX: f64 = 0.5;

/// Max climb/descent rate (ft/min).
pub const CLIMB_LIMIT_MIN: f64 = 500.0;
pub const CLIMB_LIMIT_MAX: f64 = 3000.0;
