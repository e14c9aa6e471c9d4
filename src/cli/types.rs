// 3rd party crates
use clap::Parser;

// Project imports
use crate::output::{DisplayOptions, OutputFormat};

/// List classic and v2 load balancers with their health states.
#[derive(Debug, Parser)]
#[command(name = "lobo", version)]
pub struct Cli {
    /// Exact load balancer name, or a substring to filter on when nothing matches exactly
    pub name: Option<String>,

    /// AWS profile to use (defaults to AWS_PROFILE env var or default profile)
    #[arg(short = 'p', long = "profile")]
    pub profile: Option<String>,

    /// AWS region to use (defaults to AWS_REGION env var or config file)
    #[arg(short = 'r', long = "region")]
    pub region: Option<String>,

    /// Show the DNS name column
    #[arg(long = "dns")]
    pub dns: bool,

    /// Show the ARN column (v2 load balancers only)
    #[arg(long = "arn")]
    pub arn: bool,

    /// Print a header row
    #[arg(long = "header")]
    pub header: bool,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl Cli {
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions {
            header: self.header,
            dns: self.dns,
            arn: self.arn,
        }
    }
}
