//! Simulation engine — the core of the airspace picture.
//!
//! `SimulationEngine` owns the fleet and sensor field, drains the command
//! mailbox at tick boundaries, runs the motion and detection passes, and
//! produces `AirspaceSnapshot`s. Completely headless (no transport
//! dependency), enabling deterministic testing.

use std::sync::Arc;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use airwatch_core::aircraft::HeadingCommand;
use airwatch_core::commands::{AircraftCommand, CommandKind};
use airwatch_core::constants::{DEFAULT_AIRCRAFT_COUNT, DEFAULT_SENSOR_COUNT, SENSOR_RANGE_KM};
use airwatch_core::sensors::Sensor;
use airwatch_core::state::{AirspaceSnapshot, TickStats};
use airwatch_core::types::{bearing_to_heading, SimTime};

use crate::command_buffer::CommandBuffer;
use crate::store::Fleet;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same world.
    pub seed: u64,
    pub aircraft_count: usize,
    pub sensor_count: usize,
    /// Shared detection range for the generated sensor field (km).
    pub sensor_range_km: f64,
    /// Initial time scale (1.0 = wall clock).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            aircraft_count: DEFAULT_AIRCRAFT_COUNT,
            sensor_count: DEFAULT_SENSOR_COUNT,
            sensor_range_km: SENSOR_RANGE_KM,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the fleet, the sensor field, and the
/// command mailbox.
pub struct SimulationEngine {
    fleet: Fleet,
    sensors: Vec<Sensor>,
    commands: Arc<CommandBuffer>,
    time: SimTime,
    time_scale: f64,
}

impl SimulationEngine {
    /// Create an engine with a seeded random world.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let fleet = world_setup::spawn_fleet(&mut rng, config.aircraft_count);
        let sensors =
            world_setup::sensor_field(&mut rng, config.sensor_count, config.sensor_range_km);
        Self::from_parts(fleet, sensors, config.time_scale)
    }

    /// Build an engine from an explicit fleet and sensor field.
    pub fn from_parts(fleet: Fleet, sensors: Vec<Sensor>, time_scale: f64) -> Self {
        Self {
            fleet,
            sensors,
            commands: Arc::new(CommandBuffer::new()),
            time: SimTime::default(),
            time_scale,
        }
    }

    /// Queue a setpoint command for application at the next tick boundary.
    pub fn queue_command(&self, command: AircraftCommand) {
        self.commands.push(command);
    }

    /// Shared handle to the mailbox for transport-side producers.
    pub fn command_buffer(&self) -> Arc<CommandBuffer> {
        Arc::clone(&self.commands)
    }

    /// The fixed sensor field, static for the engine's lifetime.
    pub fn sensors(&self) -> &[Sensor] {
        &self.sensors
    }

    /// Read-only access to the full fleet (the published snapshot carries
    /// only detected aircraft).
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    #[cfg(test)]
    pub(crate) fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the simulation speed multiplier.
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.time_scale = scale.clamp(0.0, 100.0);
        }
    }

    /// Advance the simulation by `dt` wall-clock seconds (scaled by the
    /// time multiplier) and return the resulting snapshot.
    ///
    /// A zero `dt` still applies pending commands but moves nothing.
    pub fn tick(&mut self, dt: f64) -> AirspaceSnapshot {
        let mut stats = TickStats::default();

        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            tracing::warn!(dt, "invalid tick dt coerced to zero");
            stats.dt_clamped = true;
            0.0
        };
        let dt = dt * self.time_scale;

        // Commands drained here are fully applied before either pass runs,
        // so the integrator never observes a half-applied setpoint.
        for command in self.commands.drain() {
            self.apply_command(command, &mut stats);
        }

        if dt > 0.0 {
            stats.integration_faults = systems::motion::run(&mut self.fleet, dt);
            // Detection consumes post-integration positions; the motion
            // pass has fully completed before this one starts.
            systems::detection::run(&mut self.fleet, &self.sensors);
            self.time.advance(dt);
        }

        systems::snapshot::build(&self.fleet, &self.time, stats)
    }

    /// Apply one drained command to the fleet's setpoint state.
    fn apply_command(&mut self, command: AircraftCommand, stats: &mut TickStats) {
        if !command.value.is_finite() {
            tracing::warn!(
                id = command.id,
                kind = ?command.kind,
                "command with non-finite value dropped"
            );
            stats.commands_dropped += 1;
            return;
        }

        let Some(aircraft) = self.fleet.get_mut(command.id) else {
            tracing::warn!(id = command.id, "command for unknown aircraft dropped");
            stats.commands_dropped += 1;
            return;
        };

        match command.kind {
            CommandKind::Speed => aircraft.target_speed = command.value,
            CommandKind::Heading => {
                aircraft.heading_cmd = HeadingCommand::Target(bearing_to_heading(command.value));
            }
            CommandKind::Altitude => aircraft.target_alt = command.value,
        }
        stats.commands_applied += 1;
    }
}
