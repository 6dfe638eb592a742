//! Command line interface.

use crate::config::{
    Config, OutputMode, DEFAULT_OUTPUT, DEFAULT_TABLE_BLOCK, DEFAULT_TIMEOUT_SECS, DEFAULT_URL,
};
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

/// Fetch Zscaler egress IPs and save them to JSON.
#[derive(Parser, Debug)]
#[command(name = "zscaler-egress-ips", version)]
pub struct Cli {
    /// Override the published egress IP feed URL
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// Output JSON filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Output summarized CIDR blocks instead of full metadata
    #[arg(short, long)]
    pub summarize: bool,

    /// Keep entries that are not ready yet (detailed output only)
    #[arg(long, conflicts_with = "summarize")]
    pub include_not_ready: bool,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,

    /// log4rs configuration file (default: log4rs.yml if present)
    #[arg(long)]
    pub log_config: Option<PathBuf>,
}

impl Cli {
    pub fn config(&self) -> Config {
        let mode = if self.summarize {
            OutputMode::Summarize
        } else {
            OutputMode::Detailed {
                include_not_ready: self.include_not_ready,
            }
        };
        Config {
            url: self.url.clone(),
            output: self.output.clone(),
            mode,
            timeout: Duration::from_secs(self.timeout),
            table_block: DEFAULT_TABLE_BLOCK,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Info
        }
    }
}
