// Standard library
use std::process::ExitCode;

// 3rd party crates
use clap::Parser;
use tokio::signal::ctrl_c;
use tracing::{error, info, warn};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

// Project modules
mod cli;
mod functions;
mod inventory;
mod output;
mod providers;
mod settings;
mod utility;

// Project imports
use crate::cli::constants::{EXIT_FAILURE, EXIT_NO_MATCHES, EXIT_SUCCESS};
use crate::cli::Cli;
use crate::functions::{run, Outcome};
use crate::settings::types::ConfigManager;

/// Lists classic and v2 load balancers together with a summary of the
/// health of their instances or targets.
///
/// Exits with 0 when something was listed, 3 when nothing matched and 1 on
/// any failure, including an interrupt.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    let cli: Cli = Cli::parse();

    let config: ConfigManager = match ConfigManager::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to initialize configuration: {}", e);
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    // setup logging; stdout is reserved for the listing.
    let log_level: String = config.get_log_level();

    let filter: EnvFilter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .parse_lossy(format!(
            "{},aws_config=error,aws_smithy_runtime=error,hyper=error,hyper_util=error",
            log_level
        ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    info!(path = ?config.config_path, "Settings have been loaded.");

    // Dropping the pipeline on interrupt cancels every in-flight request.
    tokio::select! {
        outcome = run(&cli, config.get_settings()) => match outcome {
            Ok(Outcome::Listed(count)) => {
                info!(count = count, "Listed load balancers");
                ExitCode::from(EXIT_SUCCESS)
            }
            Ok(Outcome::NoMatches) => {
                warn!("No load balancers found");
                ExitCode::from(EXIT_NO_MATCHES)
            }
            Err(e) => {
                error!("{}", e);
                ExitCode::from(EXIT_FAILURE)
            }
        },
        Ok(()) = ctrl_c() => {
            warn!("Interrupted, cancelling outstanding requests");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
