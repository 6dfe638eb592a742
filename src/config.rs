//! Compiled-in defaults and the per-run configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Public Zscaler egress IP endpoint.
pub const DEFAULT_URL: &str =
    "https://config.zscaler.com/api/getdata/zscaler.net/all/cenr?site=config.zscaler.com";

pub const DEFAULT_OUTPUT: &str = "zscaler_egress_ips.json";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Index in the feed's `data` array of the block holding the egress table.
pub const DEFAULT_TABLE_BLOCK: usize = 6;

/// What the emitter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Per-IP records with metadata. `include_not_ready` keeps entries the
    /// provider has not activated yet, with `ready: false`.
    Detailed { include_not_ready: bool },
    /// Collapsed CIDR blocks per address family.
    Summarize,
}

/// Settings for one run, passed explicitly into each stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub url: String,
    pub output: PathBuf,
    pub mode: OutputMode,
    pub timeout: Duration,
    pub table_block: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            url: DEFAULT_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: OutputMode::Detailed {
                include_not_ready: false,
            },
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            table_block: DEFAULT_TABLE_BLOCK,
        }
    }
}
