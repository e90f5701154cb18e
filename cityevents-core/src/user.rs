//! In-memory user profiles. Users are never written to disk.

use std::collections::BTreeSet;

use crate::event::EventId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    confirmed: BTreeSet<EventId>,
}

impl User {
    pub fn new(name: &str, email: &str, phone: &str, age: u32) -> Self {
        User {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            age,
            confirmed: BTreeSet::new(),
        }
    }

    /// Ids of events this user has confirmed.
    pub fn confirmed(&self) -> &BTreeSet<EventId> {
        &self.confirmed
    }

    pub fn is_confirmed(&self, id: EventId) -> bool {
        self.confirmed.contains(&id)
    }

    /// Adding an id twice is a no-op.
    pub(crate) fn add_confirmation(&mut self, id: EventId) {
        self.confirmed.insert(id);
    }

    /// Returns whether the id was present.
    pub(crate) fn remove_confirmation(&mut self, id: EventId) -> bool {
        self.confirmed.remove(&id)
    }
}

/// Parse an age typed at the prompt; anything unparsable is 0.
pub fn parse_age_input(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}
