use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use s3_upload::cli::Args;
use s3_upload::cloud::RusotoConnector;
use s3_upload::config::load_settings;
use s3_upload::security::safe_error_message;
use s3_upload::upload::UploadOrchestrator;

fn main() -> ExitCode {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    if let Err(e) = initialize_logging(args.verbose) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", safe_error_message("s3-upload failed", &format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ).context("Failed to initialize logger")?;
    Ok(())
}

/// Resolve settings, then upload with the default AWS credential chain
fn run(args: &Args) -> Result<()> {
    let settings = load_settings(args)?;
    let request = settings.into_request()?;

    let report = UploadOrchestrator::new(RusotoConnector).execute(&request)?;

    info!("s3-upload completed: {} object(s) in s3://{}", report.len(), report.bucket);
    Ok(())
}
