//! Error types for cityevents.

use thiserror::Error;

use crate::event::EventId;

/// Errors that can occur in cityevents operations.
#[derive(Error, Debug)]
pub enum CityEventsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not save events to {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Why a data-file line could not be turned back into an event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("expected 7 fields, found {0}")]
    FieldCount(usize),

    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("invalid date/time '{0}'")]
    InvalidDateTime(String),

    #[error("invalid duration '{0}'")]
    InvalidDuration(String),
}

/// Rejections when confirming attendance.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParticipationError {
    #[error("No event with id {0}")]
    UnknownEvent(EventId),

    #[error("Event {0} has already ended")]
    AlreadyEnded(EventId),
}

/// Result type alias for cityevents operations.
pub type CityEventsResult<T> = Result<T, CityEventsError>;
