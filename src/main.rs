use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::PathBuf;

use projectboard::config::Config;
use projectboard::tui::{self, App, EventHandler, TuiRunner};
use projectboard::{Board, BoardError};

mod cli;

use cli::Cli;
use cli::commands::Commands;

fn setup_logging(log_level: Option<&str>) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("projectboard")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("projectboard.log");

    // The TUI owns stdout, so logs always go to the file
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG wins over the configured level
    let mut builder = env_logger::Builder::new();
    if let Some(level) = log_level {
        builder.parse_filters(level);
    }
    builder
        .parse_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    // stdout carries command output (`add --json`), so notices go to stderr
    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        None => {
            // Default: launch TUI mode
            run_tui(config).await
        }
        Some(Commands::Add {
            title,
            description,
            people,
            json,
        }) => handle_add_command(title, description, people, *json, config),
    }
}

async fn run_tui(config: &Config) -> Result<()> {
    info!("Launching TUI mode");
    tui::install_panic_hook();
    let terminal = tui::init_terminal().context("Failed to initialize terminal")?;

    let mut runner = TuiRunner::new(terminal, App::new(config), EventHandler::from_config(&config.tui));
    let result = runner.run().await;

    // Restore even when the loop failed
    tui::restore_terminal().context("Failed to restore terminal")?;
    result
}

fn handle_add_command(title: &str, description: &str, people: &str, json: bool, config: &Config) -> Result<()> {
    info!("Adding project from command line: {:?}", title);

    let mut board = Board::new(config.form.clone());
    match board.submit(title, description, people) {
        Ok(id) => info!("Added project {}", id),
        Err(BoardError::Validation(message)) => return Err(eyre!(message)),
        Err(e) => return Err(e.into()),
    }

    if json {
        println!("{}", board.to_json().context("Failed to serialize projects")?);
    } else {
        print!("{}", board.to_text());
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration first so it can pick the log level
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(config.log_level.as_deref()).context("Failed to setup logging")?;
    info!("Starting with config from: {:?}", cli.config);

    // Run the main application logic
    run_application(&cli, &config).await.context("Application failed")?;

    Ok(())
}
