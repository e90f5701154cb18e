//! Line codec for the events data file.
//!
//! One event per line, seven `|`-separated fields:
//!
//! ```text
//! id|name|address|CATEGORY|YYYY-MM-DDTHH:MM:SS|description|durationHours
//! ```
//!
//! `|` and `\` inside the free-text fields are backslash-escaped. The id field
//! is written for readability only: reading assigns ids by file position.

mod generate;
mod parse;

pub use generate::encode;
pub use parse::decode;

pub(crate) const SEPARATOR: char = '|';
pub(crate) const ESCAPE: char = '\\';
pub(crate) const FIELD_COUNT: usize = 7;

/// Written format for start times.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
