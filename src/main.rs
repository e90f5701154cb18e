mod commands;
mod prompt;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use cityevents_core::app_config::AppConfig;
use cityevents_core::{EventStore, Session};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use commands::{MenuChoice, Shell};

#[derive(Parser)]
#[command(name = "cityevents")]
#[command(about = "Register city events and keep track of who is attending")]
struct Cli {
    /// Events data file (overrides data_file from the config)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Config file to use instead of ~/.config/cityevents/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let data_path = cli.data_file.unwrap_or_else(|| config.data_path());

    let store = match EventStore::open(&data_path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Could not load events from {}: {}", data_path.display(), e).red()
            );
            EventStore::new(&data_path)
        }
    };

    let mut shell = Shell {
        store,
        session: Session::new(),
        config,
    };

    let outcome = run(&mut shell);

    // Always leave the data file matching memory, even if input broke off.
    if let Err(e) = shell.store.save() {
        eprintln!("{}", format!("Could not save events: {}", e).red());
    }
    if outcome.is_ok() {
        println!("Goodbye!");
    }

    outcome
}

fn run(shell: &mut Shell) -> Result<()> {
    loop {
        commands::print_menu();
        let input = prompt::text("Choose an option")?;

        match MenuChoice::parse(&input) {
            Some(MenuChoice::Exit) => return Ok(()),
            Some(choice) => commands::dispatch(shell, choice)?,
            None => println!("{}", "Invalid option.".red()),
        }
    }
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<AppConfig> {
    if let Some(path) = explicit {
        return AppConfig::load_from(path, true)
            .with_context(|| format!("Failed to load config file at {}", path.display()));
    }

    match AppConfig::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            tracing::warn!(error = %e, "using default configuration");
            Ok(AppConfig::default())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
