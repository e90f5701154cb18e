use anyhow::Result;
use cityevents_core::user::parse_age_input;
use cityevents_core::User;
use owo_colors::OwoColorize;

use super::Shell;
use crate::prompt;
use crate::render::{heading, Render};

pub fn register(shell: &mut Shell) -> Result<()> {
    println!("{}", heading("Register user"));

    let name = prompt::text("Name")?;
    let email = prompt::text("Email")?;
    let phone = prompt::text("Phone")?;
    let age = parse_age_input(&prompt::text("Age (optional, 0)")?);

    let user = shell
        .session
        .register_user(User::new(&name, &email, &phone, age));
    println!("{}", format!("User {} registered and selected.", user.name).green());

    Ok(())
}

pub fn select(shell: &mut Shell) -> Result<()> {
    if shell.session.users().is_empty() {
        println!("{}", "No users registered. Register one first.".yellow());
        return Ok(());
    }

    println!("{}", heading("Select user"));
    for (i, user) in shell.session.users().iter().enumerate() {
        println!("{}. {}", i + 1, user.render());
    }

    let selected = match prompt::parsed::<usize>("Number")? {
        Some(position) => shell.session.select_user(position),
        None => None,
    };

    match selected {
        Some(user) => println!("{}", format!("User {} selected.", user.name).green()),
        None => println!("{}", "Invalid selection.".red()),
    }

    Ok(())
}
