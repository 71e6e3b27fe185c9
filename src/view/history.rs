//! Session-local log of viewed pets.

use std::collections::HashSet;

use crate::animals::{Pet, PetId};

/// Viewed pets in first-seen order, deduplicated by id.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<Pet>,
    seen: HashSet<PetId>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `pet` unless an entry with the same id exists. Returns whether it was added.
    pub fn push(&mut self, pet: &Pet) -> bool {
        if !self.seen.insert(pet.id) {
            return false;
        }
        self.entries.push(pet.clone());
        true
    }

    pub fn contains(&self, id: PetId) -> bool {
        self.seen.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pet> {
        self.entries.iter()
    }

    /// Entries whose name or primary breed contains `query`, ignoring case.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Pet> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|pet| pet.name.to_lowercase().contains(&query) || pet.primary_breed().to_lowercase().contains(&query))
            .collect()
    }
}
