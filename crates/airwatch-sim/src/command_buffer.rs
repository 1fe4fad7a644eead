//! Mailbox for pending setpoint commands.
//!
//! The transport side enqueues concurrently with tick execution; the
//! engine drains exactly once per tick by swapping the pending vector out
//! under the lock. A command is therefore applied exactly once and is
//! never observed half-applied by an integration pass.

use std::sync::Mutex;

use airwatch_core::commands::{AircraftCommand, CommandError};

#[derive(Debug, Default)]
pub struct CommandBuffer {
    pending: Mutex<Vec<AircraftCommand>>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread-safe enqueue. Unknown aircraft ids are accepted here and
    /// only dropped when the engine fails to resolve them at apply time.
    pub fn push(&self, command: AircraftCommand) {
        match self.pending.lock() {
            Ok(mut pending) => pending.push(command),
            Err(poisoned) => poisoned.into_inner().push(command),
        }
    }

    /// Parse-and-enqueue convenience for loosely-typed transports.
    /// Malformed commands are rejected here; unknown ids are not.
    pub fn push_parts(&self, id: u32, kind: &str, value: f64) -> Result<(), CommandError> {
        let command = AircraftCommand::from_parts(id, kind, value)?;
        self.push(command);
        Ok(())
    }

    /// Swap out and return every pending command.
    pub fn drain(&self) -> Vec<AircraftCommand> {
        match self.pending.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}
