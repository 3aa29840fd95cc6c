//! Core configuration types.
//! - Config holds the CLI's logging settings.
//! - LogLevel is the user-facing verbosity and knows its tracing directive.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::paths;

/// Verbosity accepted from the CLI and config.xml.
///
/// Each level is one step chattier than its tracing name suggests: `normal`
/// shows the per-run summary, `info` adds every rename, `debug` adds everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Quiet,
    #[default]
    Normal,
    Info,
    Debug,
}

impl LogLevel {
    /// Case-insensitive; accepts a few common aliases.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }

    /// `EnvFilter` directive for this level.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Quiet => "error",
            LogLevel::Normal => "info",
            LogLevel::Info => "debug",
            LogLevel::Debug => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration of the CLI around the renamer.
///
/// The renamer itself has no tunables; this only shapes logging.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: LogLevel,
    /// Extra log sink; terminal output is always kept.
    pub log_file: Option<PathBuf>,
    /// JSON lines instead of compact text.
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_file: paths::default_log_path().ok(),
            json_logs: false,
        }
    }
}
