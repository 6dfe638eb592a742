//! log4rs setup.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when present.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

const PATTERN: &str = "[{h({l})}] {m}{n}";

/// Where log records end up after [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Built-in console appender on stderr.
    Stderr,
    /// Whatever appenders the given log4rs file declares.
    ConfigFile(PathBuf),
}

impl LogTarget {
    /// True if `log::error!` is guaranteed to reach stderr.
    pub fn is_stderr(&self) -> bool {
        matches!(self, LogTarget::Stderr)
    }
}

/// Initialize logging.
///
/// An explicit `config_file` must exist. Without one, `log4rs.yml` in the
/// working directory is used if present; otherwise logs go to stderr at
/// `level`.
pub fn init(level: LevelFilter, config_file: Option<&Path>) -> Result<LogTarget, Box<dyn Error>> {
    if let Some(file) = resolve_config_file(config_file)? {
        log4rs::init_file(file, Default::default())
            .map_err(|e| format!("Error loading log config {}: {e}", file.display()))?;
        log::debug!("Logging configured from {}", file.display());
        return Ok(LogTarget::ConfigFile(file.to_path_buf()));
    }

    log4rs::init_config(stderr_config(level)?)?;
    Ok(LogTarget::Stderr)
}

/// Pick the log4rs file to load, if any.
fn resolve_config_file(explicit: Option<&Path>) -> Result<Option<&Path>, Box<dyn Error>> {
    match explicit {
        Some(file) if !file.exists() => {
            Err(format!("Log config file does not exist: {}", file.display()).into())
        }
        Some(file) => Ok(Some(file)),
        None => Ok(Some(Path::new(DEFAULT_LOG_CONFIG)).filter(|f| f.exists())),
    }
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
