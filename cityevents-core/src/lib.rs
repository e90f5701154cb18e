//! Core types for cityevents.
//!
//! - `event` and `user` records
//! - `codec` for the pipe-delimited events data file
//! - `timeline` for classifying events as upcoming, ongoing or past
//! - `store` and `session` holding the state of a running shell

pub mod app_config;
pub mod codec;
pub mod error;
pub mod event;
pub mod session;
pub mod store;
pub mod timeline;
pub mod user;

pub use error::{CityEventsError, CityEventsResult, CodecError, ParticipationError};
pub use event::{Category, Event, EventId, NewEvent};
pub use session::Session;
pub use store::EventStore;
pub use timeline::{EventState, Timeline};
pub use user::User;
