//! Terminal rendering for cityevents types.
//!
//! Extension traits that add colored output to cityevents-core types using
//! owo_colors.

use cityevents_core::{Event, EventState, User};
use owo_colors::OwoColorize;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for EventState {
    fn render(&self) -> String {
        let label = self.to_string();
        match self {
            EventState::Ongoing => label.green().to_string(),
            EventState::Future => label.cyan().to_string(),
            EventState::Past => label.dimmed().to_string(),
        }
    }
}

impl Render for User {
    fn render(&self) -> String {
        format!("{} {}", self.name, format!("({})", self.email).dimmed())
    }
}

pub fn heading(title: &str) -> String {
    format!("\n=== {} ===", title).bold().to_string()
}

/// Full row used for ongoing and upcoming events.
pub fn event_row(event: &Event, preview_chars: usize) -> String {
    format!(
        "ID: {} | {} | {} | {} | Starts: {} | {}",
        event.id,
        event.name.bold(),
        event.address,
        event.category,
        event.start.format(DATE_TIME_FORMAT),
        preview(&event.description, preview_chars).dimmed()
    )
}

/// Short row used for past events.
pub fn past_row(event: &Event) -> String {
    format!(
        "ID: {} | {} | Date: {} | {}",
        event.id,
        event.name,
        event.start.format("%Y-%m-%d"),
        event.category
    )
    .dimmed()
    .to_string()
}

pub fn participation_row(event: &Event, state: EventState) -> String {
    format!(
        "ID: {} | {} | {} | Starts: {} | Status: {}",
        event.id,
        event.name.bold(),
        event.address,
        event.start.format(DATE_TIME_FORMAT),
        state.render()
    )
}

/// First `max_chars` characters of `text`, with `...` when cut.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
