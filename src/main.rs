use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use current_temp::prompt::prompt_zip_code;
use current_temp::{CurrentTempConfig, CurrentTempError, HttpFetcher, Pipeline, ZipCode};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Current temperature for a US zip code
#[derive(Parser, Debug)]
#[command(name = "current-temp")]
#[command(author, version, about = "Look up the current temperature for a US zip code", long_about = None)]
struct Cli {
    /// Zip code to look up; prompts interactively when omitted
    #[arg(short, long)]
    zip: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, env = "CURRENT_TEMP_CONFIG")]
    config: Option<PathBuf>,

    /// Raise the log level (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(config: &CurrentTempConfig, verbose: u8) {
    let configured = LOG_LEVELS
        .iter()
        .position(|level| *level == config.logging.level)
        .unwrap_or(1);
    let level = LOG_LEVELS[(configured + usize::from(verbose)).min(LOG_LEVELS.len() - 1)];

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn read_zip_code(zip: Option<String>) -> Result<ZipCode> {
    match zip {
        Some(zip) => ZipCode::parse(&zip)
            .map_err(|reason| CurrentTempError::validation(format!("'{zip}': {reason}")).into()),
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let zip_code = prompt_zip_code(&mut stdin.lock(), &mut stdout)?;
            Ok(zip_code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CurrentTempConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    init_logging(&config, cli.verbose);

    let zip_code = read_zip_code(cli.zip)?;

    let fetcher = HttpFetcher::new(&config.http)?;
    let pipeline = Pipeline::new(&config, fetcher);
    let conditions = pipeline
        .run(&zip_code)
        .with_context(|| format!("Lookup for zip code {zip_code} failed"))?;

    println!("{conditions}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // the chain is printed below; a log line would repeat it
            debug!(error = ?err, "Run failed");
            match err.downcast_ref::<CurrentTempError>() {
                Some(app_err) => eprintln!("{}\n{:#}", app_err.user_message(), err),
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
