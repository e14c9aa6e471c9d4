// Standard library
use std::error::Error;

// 3rd party crates
use aws_config::SdkConfig;
use tracing::{debug, info};

// Project imports
use crate::cli::Cli;
use crate::inventory::list_load_balancers;
use crate::output::{render_json, render_table, sort_records, OutputFormat};
use crate::providers::aws::{load_sdk_config, ApplicationClient, ClassicClient};
use crate::providers::types::LoadBalancerRecord;
use crate::settings::types::Settings;
use crate::utility::limiter::CallLimiter;

/// What a completed listing found.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Listed(usize),
    NoMatches,
}

/// Lists load balancers and prints them to stdout.
///
/// Nothing is printed unless every health lookup succeeded.
pub async fn run(cli: &Cli, settings: &Settings) -> Result<Outcome, Box<dyn Error>> {
    let sdk_config: SdkConfig = load_sdk_config(cli.profile.clone(), cli.region.clone()).await?;
    let classic: ClassicClient = ClassicClient::new(&sdk_config);
    let application: ApplicationClient = ApplicationClient::new(&sdk_config);

    let limiter: CallLimiter = CallLimiter::new(
        settings.get_max_concurrent_calls(),
        settings.get_call_timeout(),
    );
    debug!(
        max_concurrent_calls = settings.get_max_concurrent_calls(),
        call_timeout_secs = settings.api.call_timeout_secs,
        "Provider call limits"
    );

    let mut records: Vec<LoadBalancerRecord> = list_load_balancers(
        cli.name.as_deref(),
        &classic,
        &application,
        &limiter,
        settings.get_page_size(),
    )
    .await?;

    if records.is_empty() {
        info!(name = ?cli.name, "No load balancers matched");
        return Ok(Outcome::NoMatches);
    }

    sort_records(&mut records);

    match cli.output {
        OutputFormat::Table => {
            for line in render_table(&records, &cli.display_options()) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", render_json(&records)?),
    }

    Ok(Outcome::Listed(records.len()))
}
