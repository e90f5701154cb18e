pub mod attendance;
pub mod events;
pub mod users;

use anyhow::Result;
use chrono::NaiveDateTime;
use cityevents_core::app_config::AppConfig;
use cityevents_core::{EventStore, Session};
use owo_colors::OwoColorize;

/// Everything a menu command may read or change.
pub struct Shell {
    pub store: EventStore,
    pub session: Session,
    pub config: AppConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RegisterUser,
    SelectUser,
    RegisterEvent,
    ListEvents,
    ConfirmParticipation,
    ListParticipations,
    CancelParticipation,
    Exit,
}

impl MenuChoice {
    const ENTRIES: [(&'static str, MenuChoice, &'static str); 8] = [
        ("1", MenuChoice::RegisterUser, "Register user"),
        ("2", MenuChoice::SelectUser, "Select user"),
        ("3", MenuChoice::RegisterEvent, "Register event"),
        ("4", MenuChoice::ListEvents, "List events"),
        ("5", MenuChoice::ConfirmParticipation, "Confirm participation"),
        ("6", MenuChoice::ListParticipations, "List my participations"),
        ("7", MenuChoice::CancelParticipation, "Cancel participation"),
        ("0", MenuChoice::Exit, "Exit"),
    ];

    pub fn parse(input: &str) -> Option<MenuChoice> {
        let input = input.trim();
        Self::ENTRIES
            .iter()
            .find(|(key, _, _)| *key == input)
            .map(|(_, choice, _)| *choice)
    }
}

pub fn print_menu() {
    println!("{}", "\n=== City Events ===".bold());
    for (key, _, label) in MenuChoice::ENTRIES {
        println!("{}. {}", key, label);
    }
}

pub fn dispatch(shell: &mut Shell, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::RegisterUser => users::register(shell),
        MenuChoice::SelectUser => users::select(shell),
        MenuChoice::RegisterEvent => events::register(shell),
        MenuChoice::ListEvents => {
            events::list(shell);
            Ok(())
        }
        MenuChoice::ConfirmParticipation => attendance::confirm(shell),
        MenuChoice::ListParticipations => {
            attendance::list(shell);
            Ok(())
        }
        MenuChoice::CancelParticipation => attendance::cancel(shell),
        MenuChoice::Exit => Ok(()),
    }
}

/// Local wall-clock time, the reference for every classification.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Shared message when an action needs a selected user.
pub fn print_no_user() {
    println!("{}", "Select a user first.".yellow());
}
