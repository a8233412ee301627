mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser};
use okved_core::normalize_phone;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{lookup, Context};
use crate::error::{report_error, EXIT_FAILURE};
use okved_config as config;

#[derive(Debug, Parser)]
#[command(
    name = "phone-okved",
    version,
    about = "Match a Russian mobile number to an OKVED code",
    after_help = "Example: phone-okved \"8 (900) 123-45-67\""
)]
struct Cli {
    /// Phone number in any common notation
    phone: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Download the dataset from this URL instead of the configured one
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,
    /// Read the dataset from a local JSON file
    #[arg(long)]
    file: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        phone,
        config: config_path,
        url,
        file,
        json,
        verbose,
    } = cli;

    let Some(raw_phone) = phone else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let phone = normalize_phone(&raw_phone)?;
    debug!(phone = %phone, "phone normalized");

    let app_config = config::load(config_path.as_deref()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path.as_deref()) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let source = lookup::dataset_source(&app_config, url, file)?;
    let ctx = Context { json };
    lookup::lookup(&ctx, &phone, source.as_ref())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
