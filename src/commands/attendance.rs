use anyhow::Result;
use cityevents_core::{EventId, ParticipationError};
use owo_colors::OwoColorize;

use super::{events, now, print_no_user, Shell};
use crate::prompt;
use crate::render::{heading, participation_row};

pub fn confirm(shell: &mut Shell) -> Result<()> {
    if shell.session.current_user().is_none() {
        print_no_user();
        return Ok(());
    }

    events::list(shell);

    let Some(id) = prompt::parsed::<EventId>("Event ID to attend")? else {
        println!("{}", "Invalid id.".red());
        return Ok(());
    };

    let Some(user) = shell.session.current_user_mut() else {
        print_no_user();
        return Ok(());
    };

    match shell.store.confirm_participation(user, id, now()) {
        Ok(event) => println!(
            "{}",
            format!("Participation confirmed for '{}'!", event.name).green()
        ),
        Err(ParticipationError::AlreadyEnded(_)) => {
            println!("{}", "That event has already ended.".yellow())
        }
        Err(ParticipationError::UnknownEvent(_)) => println!("{}", "Invalid event.".red()),
    }

    Ok(())
}

pub fn list(shell: &Shell) {
    let Some(user) = shell.session.current_user() else {
        print_no_user();
        return;
    };

    let events = shell.store.list_participations(user);
    if events.is_empty() {
        println!("{}", "\nNo confirmed participations.".dimmed());
        return;
    }

    println!("{}", heading("My participations"));
    let now = now();
    for event in events {
        println!("{}", participation_row(event, event.state_at(now)));
    }
}

pub fn cancel(shell: &mut Shell) -> Result<()> {
    if shell.session.current_user().is_none() {
        print_no_user();
        return Ok(());
    }

    list(shell);

    let Some(id) = prompt::parsed::<EventId>("Event ID to cancel")? else {
        println!("{}", "Invalid id.".red());
        return Ok(());
    };

    let Some(user) = shell.session.current_user_mut() else {
        print_no_user();
        return Ok(());
    };

    if shell.store.cancel_participation(user, id) {
        println!("{}", "Participation cancelled.".green());
    } else {
        println!("{}", format!("You had not confirmed event {}.", id).dimmed());
    }

    Ok(())
}
