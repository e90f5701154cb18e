//! Event storage backed by a single data file.
//!
//! The whole file is rewritten on every save. Writes go to a sibling
//! `.tmp` file which is then renamed over the data file, so the data file
//! always holds the last complete save.

use chrono::NaiveDateTime;
use std::ffi::OsString;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::codec::{decode, encode};
use crate::error::{CityEventsError, CityEventsResult, ParticipationError};
use crate::event::{Event, EventId, NewEvent};
use crate::user::User;

#[derive(Debug)]
pub struct EventStore {
    path: PathBuf,
    events: Vec<Event>,
    next_id: EventId,
}

impl EventStore {
    /// An empty store that will save to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventStore {
            path: path.into(),
            events: Vec::new(),
            next_id: EventId::FIRST,
        }
    }

    /// Load the store from `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> CityEventsResult<Self> {
        let path = path.into();
        let events = Self::load_events(&path)?;
        let next_id = events
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(EventId::FIRST, EventId::next);

        debug!(path = %path.display(), count = events.len(), %next_id, "loaded events");

        Ok(EventStore {
            path,
            events,
            next_id,
        })
    }

    /// Read events from a data file, numbering lines from 1 in file order.
    ///
    /// Lines that fail to decode, including lines that are not valid UTF-8,
    /// are skipped with a warning. A skipped line still uses up its number,
    /// so the event on line 3 is always id 3.
    fn load_events(path: &Path) -> CityEventsResult<Vec<Event>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(path)?);
        let mut events = Vec::new();
        let mut id = EventId::FIRST;

        for (index, bytes) in reader.split(b'\n').enumerate() {
            let mut bytes = bytes?;
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }

            match String::from_utf8(bytes) {
                Ok(line) => match decode(&line, id) {
                    Ok(event) => events.push(event),
                    Err(e) => warn!(line = index + 1, error = %e, "skipping unreadable event"),
                },
                Err(e) => warn!(line = index + 1, error = %e, "skipping line that is not UTF-8"),
            }
            id = id.next();
        }

        Ok(events)
    }

    /// Events in registration (file) order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn next_id(&self) -> EventId {
        self.next_id
    }

    /// Give `new` the next id, append it and save the whole store.
    ///
    /// When the save fails the event stays registered in memory and the
    /// save error is returned.
    pub fn register(&mut self, new: NewEvent) -> CityEventsResult<Event> {
        let event = Event::from_new(self.next_id, new);
        self.next_id = self.next_id.next();
        self.events.push(event.clone());

        debug!(id = %event.id, name = %event.name, "registered event");

        self.save()?;
        Ok(event)
    }

    /// Rewrite the data file with every event, in memory order.
    pub fn save(&self) -> CityEventsResult<()> {
        let save_error = |source| CityEventsError::Save {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(save_error)?;
        }

        let mut content = String::new();
        for event in &self.events {
            content.push_str(&encode(event));
            content.push('\n');
        }

        let temp = temp_path(&self.path);
        std::fs::write(&temp, content).map_err(save_error)?;
        if let Err(e) = std::fs::rename(&temp, &self.path) {
            let _ = std::fs::remove_file(&temp);
            return Err(save_error(e));
        }

        debug!(path = %self.path.display(), count = self.events.len(), "saved events");
        Ok(())
    }

    // PARTICIPATION:

    /// Add `id` to the user's confirmed events.
    ///
    /// Rejected when no such event exists or it has already ended at `now`.
    /// Confirming twice is accepted and changes nothing.
    pub fn confirm_participation(
        &self,
        user: &mut User,
        id: EventId,
        now: NaiveDateTime,
    ) -> Result<&Event, ParticipationError> {
        let event = self.get(id).ok_or(ParticipationError::UnknownEvent(id))?;

        if event.has_ended(now) {
            return Err(ParticipationError::AlreadyEnded(id));
        }

        user.add_confirmation(id);
        Ok(event)
    }

    /// Remove `id` from the user's confirmed events. Returns whether it was there.
    pub fn cancel_participation(&self, user: &mut User, id: EventId) -> bool {
        user.remove_confirmation(id)
    }

    /// The user's confirmed events, earliest start first.
    pub fn list_participations(&self, user: &User) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| user.is_confirmed(e.id))
            .collect();
        events.sort_by_key(|e| e.start);
        events
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("events.data"));
    name.push(".tmp");
    path.with_file_name(name)
}
