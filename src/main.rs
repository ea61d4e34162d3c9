//! kreate-replay: drive a color picker from a session script.
//!
//! Every notification the picker emits is printed to stdout as one JSON
//! object per line. Logs go to stderr.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use kreate::{AppConfig, ConfigError, LogLevel, Session, init_logging};
use kreate_picker::PickerCoordinator;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Session script: a JSON array of interactions
    #[arg(required_unless_present = "write_default_config")]
    session: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Override the configured log level
    #[arg(long, short = 'l', value_enum)]
    log_level: Option<LogLevel>,

    /// Write a default configuration file and exit
    #[arg(long)]
    write_default_config: bool,
}

fn load_config(cli: &Cli) -> Result<(AppConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = &cli.config {
        return Ok((AppConfig::load(path)?, Some(path.clone())));
    }
    match AppConfig::default_path() {
        Some(path) if path.exists() => Ok((AppConfig::load(&path)?, Some(path))),
        _ => Ok((AppConfig::default(), None)),
    }
}

fn write_default_config(cli: &Cli) -> Result<PathBuf, ConfigError> {
    let config = AppConfig::default();
    match &cli.config {
        Some(path) => {
            config.save(path)?;
            Ok(path.clone())
        }
        None => config.save_to_default_path(),
    }
}

fn run(cli: &Cli, config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let Some(session_path) = &cli.session else {
        return Ok(());
    };
    let session = Session::load(session_path)?;

    let mut picker = PickerCoordinator::new(&config.picker);
    let notifications = session.replay(&mut picker);
    log::info!(
        "Replayed {} interactions, {} notifications",
        session.interactions.len(),
        notifications.len()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for notification in &notifications {
        writeln!(out, "{}", serde_json::to_string(notification)?)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.write_default_config {
        init_logging(cli.log_level.unwrap_or_default());
        return match write_default_config(&cli) {
            Ok(path) => {
                println!("{}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Failed to write configuration: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    // The logger needs the configured level, so configuration is read first
    // and any failure is reported once logging is up.
    let loaded = load_config(&cli);
    let level = cli
        .log_level
        .or_else(|| loaded.as_ref().ok().map(|(c, _)| c.preferences.log_level))
        .unwrap_or_default();
    init_logging(level);

    let config = match loaded {
        Ok((config, Some(path))) => {
            log::info!("Loaded configuration from {:?}", path);
            config
        }
        Ok((config, None)) => {
            log::debug!("No config file found; using defaults");
            config
        }
        Err(e) => {
            log::error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
