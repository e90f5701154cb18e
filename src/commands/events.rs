use anyhow::Result;
use chrono::NaiveDateTime;
use cityevents_core::event::parse_duration_input;
use cityevents_core::{Category, NewEvent, Timeline};
use owo_colors::OwoColorize;

use super::{now, Shell};
use crate::prompt;
use crate::render::{event_row, heading, past_row};

/// Format expected when typing a start time.
const START_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn register(shell: &mut Shell) -> Result<()> {
    println!("{}", heading("Register event"));

    let name = prompt::text("Event name")?;
    let address = prompt::text("Address")?;

    let categories: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
    println!("  Categories: {}", categories.join(", ").dimmed());
    let category = Category::from_input(&prompt::text("Category")?);

    let start_input = prompt::text("Start (YYYY-MM-DD HH:MM)")?;
    let Some(start) = parse_start(&start_input) else {
        println!(
            "{}",
            "Invalid date format. Use YYYY-MM-DD HH:MM. No event was created.".red()
        );
        return Ok(());
    };

    let description = prompt::text("Description")?;
    let default_hours = shell.config.default_duration_hours;
    let duration_hours = parse_duration_input(
        &prompt::text(&format!("Duration in hours (default {})", default_hours))?,
        default_hours,
    );

    let new_event = NewEvent {
        name,
        address,
        category,
        start,
        description,
        duration_hours,
    };

    match shell.store.register(new_event) {
        Ok(event) => println!("{}", format!("Event '{}' registered.", event.name).green()),
        Err(e) => {
            tracing::warn!(error = %e, "event registered but not saved");
            println!("{}", format!("Event registered but not saved: {}", e).red());
        }
    }

    Ok(())
}

pub fn list(shell: &Shell) {
    let events = shell.store.events();
    if events.is_empty() {
        println!("{}", "\nNo events registered.".dimmed());
        return;
    }

    let timeline = Timeline::at(events, now());
    let preview = shell.config.description_preview;

    println!("{}", heading("Happening now"));
    if timeline.ongoing.is_empty() {
        println!("{}", "No events happening right now.".dimmed());
    }
    for event in &timeline.ongoing {
        println!("{}", event_row(event, preview));
    }

    println!("{}", heading("Upcoming (soonest first)"));
    for event in &timeline.future {
        println!("{}", event_row(event, preview));
    }

    println!("{}", heading("Past"));
    for event in &timeline.past {
        println!("{}", past_row(event));
    }
}

fn parse_start(input: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(input.trim(), START_INPUT_FORMAT).ok()
}
