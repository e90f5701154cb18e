//! Event records.
//!
//! An event has a fixed start and a whole number of hours of duration. Its end
//! is always derived, never stored, so `end = start + duration_hours` holds
//! for every event in memory and on disk.

use chrono::{Duration, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

/// Duration used when none (or garbage) is entered at registration.
pub const DEFAULT_DURATION_HOURS: u32 = 2;

/// Sequential event identifier, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EventId(pub u32);

impl EventId {
    pub const FIRST: EventId = EventId(1);

    pub fn next(self) -> EventId {
        EventId(self.0 + 1)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EventId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EventId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Party,
    Sports,
    Show,
    Cultural,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Party,
        Category::Sports,
        Category::Show,
        Category::Cultural,
        Category::Other,
    ];

    /// Name written to the data file.
    pub fn name(self) -> &'static str {
        match self {
            Category::Party => "PARTY",
            Category::Sports => "SPORTS",
            Category::Show => "SHOW",
            Category::Cultural => "CULTURAL",
            Category::Other => "OTHER",
        }
    }

    /// Exact lookup used when reading the data file.
    ///
    /// Besides the canonical names this accepts the names older data files
    /// were written with (FESTA, ESPORTIVO, OUTROS). Anything else is `None`.
    pub fn from_name(name: &str) -> Option<Category> {
        match name {
            "PARTY" | "FESTA" => Some(Category::Party),
            "SPORTS" | "ESPORTIVO" => Some(Category::Sports),
            "SHOW" => Some(Category::Show),
            "CULTURAL" => Some(Category::Cultural),
            "OTHER" | "OUTROS" => Some(Category::Other),
            _ => None,
        }
    }

    /// Lenient lookup for typed input: case-insensitive, unknown maps to `Other`.
    pub fn from_input(input: &str) -> Category {
        Category::from_name(&input.trim().to_uppercase()).unwrap_or(Category::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fields of an event before it has been given an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub name: String,
    pub address: String,
    pub category: Category,
    pub start: NaiveDateTime,
    pub description: String,
    pub duration_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub address: String,
    pub category: Category,
    pub start: NaiveDateTime,
    pub description: String,
    pub duration_hours: u32,
}

impl Event {
    pub fn from_new(id: EventId, new: NewEvent) -> Self {
        Event {
            id,
            name: new.name,
            address: new.address,
            category: new.category,
            start: new.start,
            description: new.description,
            duration_hours: new.duration_hours,
        }
    }

    /// Saturates at `NaiveDateTime::MAX` when the duration runs past the
    /// representable range; such an event never ends.
    pub fn end(&self) -> NaiveDateTime {
        self.start
            .checked_add_signed(Duration::hours(i64::from(self.duration_hours)))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// True once `now` has reached the end of the event.
    pub fn has_ended(&self, now: NaiveDateTime) -> bool {
        now >= self.end()
    }
}

/// Parse a duration typed at the prompt, falling back to the default.
pub fn parse_duration_input(input: &str, default: u32) -> u32 {
    input.trim().parse().unwrap_or(default)
}
