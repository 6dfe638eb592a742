//! Fetch the published Zscaler egress IP list and save it as JSON.
//!
//! The pipeline is strictly linear: [`feed`] fetches and parses the
//! provider document, [`processing`] filters and summarizes, [`output`]
//! builds the document and writes it.

pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;

use colored::Colorize;
use config::Config;
use error::Error;
use feed::Fetcher;
use std::path::PathBuf;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Entries (detailed mode) or CIDR blocks (summarize mode) written.
    pub records: usize,
    pub path: PathBuf,
}

/// Run the whole pipeline once: fetch, parse, filter, emit, write.
///
/// Nothing is written unless every earlier stage succeeded.
pub async fn run(config: &Config) -> Result<RunReport, Error> {
    let body = Fetcher::new(config.timeout)?.fetch(&config.url).await?;
    let entries = feed::parse_feed(&body, config.table_block)?;
    let document = output::emit(entries, config.mode);
    let records = output::write_document(&document, &config.output)?;

    log::info!(
        "Saved {records} entries to {}",
        config.output.display().to_string().green()
    );
    Ok(RunReport {
        records,
        path: config.output.clone(),
    })
}
