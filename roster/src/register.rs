//! Register - a capacity-bounded, ordered collection of names
//!
//! Additions that would overflow the room capacity are dropped silently;
//! callers check `size_of_register` to detect them. Positional access is
//! checked and reports `RosterError::IndexOutOfRange`.

use serde::Serialize;
use std::fmt;
use tracing::{debug, trace};

use crate::error::RosterError;
use crate::name::Name;

/// Room capacity used by `Register::new`
pub const DEFAULT_ROOM_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Register {
    room_capacity: usize,
    names: Vec<Name>,
}

impl Register {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_ROOM_CAPACITY)
    }

    pub fn with_capacity(room_capacity: usize) -> Self {
        Self {
            room_capacity,
            names: Vec::new(),
        }
    }

    pub fn room_capacity(&self) -> usize {
        self.room_capacity
    }

    /// Append a name if there is room
    pub fn add_name(&mut self, name: Name) {
        if self.names.len() < self.room_capacity {
            trace!(name = %name, "name added");
            self.names.push(name);
        }
    }

    /// Append the whole batch, or none of it if it would not fit
    pub fn add_names(&mut self, batch: Vec<Name>) {
        if self.names.len() + batch.len() <= self.room_capacity {
            trace!(count = batch.len(), "names added");
            self.names.extend(batch);
        }
    }

    pub fn remove_name(&mut self, pos: usize) -> Result<Name, RosterError> {
        self.check_index(pos)?;
        let removed = self.names.remove(pos);
        trace!(pos, name = %removed, "name removed");
        Ok(removed)
    }

    pub fn get_name(&self, pos: usize) -> Result<&Name, RosterError> {
        let len = self.names.len();
        self.names
            .get(pos)
            .ok_or(RosterError::IndexOutOfRange { index: pos, len })
    }

    pub fn get_name_mut(&mut self, pos: usize) -> Result<&mut Name, RosterError> {
        let len = self.names.len();
        self.names
            .get_mut(pos)
            .ok_or(RosterError::IndexOutOfRange { index: pos, len })
    }

    pub fn size_of_register(&self) -> usize {
        self.names.len()
    }

    pub fn is_register_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn clear_register(&mut self) {
        debug!(removed = self.names.len(), "register cleared");
        self.names.clear();
    }

    /// Whether any first name starts with `initial` (case-sensitive)
    pub fn search_register_by_first_name_initial(&self, initial: char) -> bool {
        self.names.iter().any(|n| n.first_name().starts_with(initial))
    }

    /// Number of first names equal to `name`, ignoring case
    pub fn count_first_name_occurrences(&self, name: &str) -> usize {
        let wanted = name.to_lowercase();
        self.names
            .iter()
            .filter(|n| n.first_name().to_lowercase() == wanted)
            .count()
    }

    /// Sort by family name, then first name
    pub fn sort_register(&mut self) {
        self.names.sort();
        trace!(len = self.names.len(), "register sorted");
    }

    pub fn contains_name(&self, name: &Name) -> bool {
        self.names.contains(name)
    }

    /// Live view over the entries in their current order
    pub fn iter(&self) -> std::slice::Iter<'_, Name> {
        self.names.iter()
    }

    /// JSON snapshot of capacity and entries
    pub fn export_json(&self) -> Result<String, RosterError> {
        Ok(serde_json::to_string(self)?)
    }

    fn check_index(&self, pos: usize) -> Result<(), RosterError> {
        if pos < self.names.len() {
            Ok(())
        } else {
            Err(RosterError::IndexOutOfRange {
                index: pos,
                len: self.names.len(),
            })
        }
    }
}

impl Default for Register {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Register {
    type Item = &'a Name;
    type IntoIter = std::slice::Iter<'a, Name>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.names.iter().map(Name::full_name).collect();
        write!(
            f,
            "Register:[names=[{}], room capacity={}]",
            names.join(", "),
            self.room_capacity
        )
    }
}
