//! Flat aircraft store owned by the simulation engine.
//!
//! One contiguous array of per-aircraft state plus an id→index map.
//! The id set is fixed for the engine's lifetime; the store is created at
//! construction and mutated only by `tick`.

use std::collections::HashMap;

use airwatch_core::aircraft::Aircraft;

#[derive(Debug, Clone, Default)]
pub struct Fleet {
    aircraft: Vec<Aircraft>,
    index: HashMap<u32, usize>,
}

impl Fleet {
    /// Build a fleet from explicit aircraft. Ids must be unique.
    pub fn from_aircraft(aircraft: Vec<Aircraft>) -> Self {
        let index = aircraft
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id, i))
            .collect();
        Self { aircraft, index }
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Aircraft> {
        self.index.get(&id).map(|&i| &self.aircraft[i])
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Aircraft> {
        let i = self.index.get(&id).copied()?;
        Some(&mut self.aircraft[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Aircraft> {
        self.aircraft.iter()
    }

    pub fn as_slice(&self) -> &[Aircraft] {
        &self.aircraft
    }

    pub fn as_mut_slice(&mut self) -> &mut [Aircraft] {
        &mut self.aircraft
    }
}
