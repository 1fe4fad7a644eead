//! Operator setpoint commands and their ingestion boundary.
//!
//! Commands are queued by the transport layer and applied at the next tick
//! boundary. The legacy console verbs (`speedto`, `headingto`, `heightto`)
//! are accepted on the wire alongside the plain kind names.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which setpoint a command overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// Target speed in knots.
    #[serde(alias = "speedto")]
    Speed,
    /// Target heading as a compass bearing in degrees (clockwise from north).
    #[serde(alias = "headingto")]
    Heading,
    /// Target altitude in feet.
    #[serde(alias = "heightto")]
    Altitude,
}

/// A setpoint change for one aircraft.
///
/// Wire form: `{"id": 7, "command": "speedto", "value": 250.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftCommand {
    pub id: u32,
    #[serde(rename = "command")]
    pub kind: CommandKind,
    pub value: f64,
}

/// Rejection reasons at the command-ingestion boundary.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("unknown command kind `{0}`")]
    UnknownKind(String),
    #[error("non-finite value for {kind:?} command")]
    NonFiniteValue { kind: CommandKind },
}

impl AircraftCommand {
    /// Build a command from loosely-typed transport fields.
    ///
    /// Unknown aircraft ids are not rejected here; they are dropped when
    /// the engine fails to resolve them at apply time.
    pub fn from_parts(id: u32, kind: &str, value: f64) -> Result<Self, CommandError> {
        let kind = match kind {
            "speed" | "speedto" => CommandKind::Speed,
            "heading" | "headingto" => CommandKind::Heading,
            "altitude" | "heightto" => CommandKind::Altitude,
            other => return Err(CommandError::UnknownKind(other.to_string())),
        };
        if !value.is_finite() {
            return Err(CommandError::NonFiniteValue { kind });
        }
        Ok(Self { id, kind, value })
    }
}
