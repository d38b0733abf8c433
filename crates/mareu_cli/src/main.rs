//! Terminal front-end for the meeting scheduler.
//!
//! # Responsibility
//! - Resolve configuration from file and flags, then bootstrap logging.
//! - Build the shared in-memory store and hand it to the shell.

mod shell;
mod views;

use chrono::{Local, NaiveDateTime};
use clap::Parser;
use log::info;
use mareu_core::{
    core_version, init_logging, load_config, sample_meetings, CoreConfig,
    InMemoryMeetingRepository,
};
use shell::Shell;
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mareu", version, about = "Schedule meetings from the terminal")]
struct Cli {
    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the configured log level.
    #[arg(long)]
    log_level: Option<String>,
    /// Writes rolling log files to this absolute directory instead of stderr.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Starts with an empty meeting list.
    #[arg(long)]
    no_sample_data: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("mareu: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(&cli)?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let repo = InMemoryMeetingRepository::with_places(config.place_catalog()?);
    if config.seed_sample_meetings {
        let seeded = repo.seed(sample_meetings(Local::now().date_naive())?)?;
        info!("event=sample_seed module=cli status=ok meetings={seeded}");
    }

    println!("mareu {} - type `help` for commands", core_version());
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(repo, stdin.lock(), stdout.lock(), local_now).run()?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<CoreConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        // Stderr shares the terminal with the shell; keep it quiet by default.
        None => CoreConfig {
            log_level: "warn".to_string(),
            ..CoreConfig::default()
        },
    };

    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
    if cli.no_sample_data {
        config.seed_sample_meetings = false;
    }

    config.validate()?;
    Ok(config)
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}
