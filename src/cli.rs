//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --dir takes precedence over the positional DIRECTORY.
//! - --debug is a shorthand for --log-level debug.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueHint};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};

/// Renumber every file in a folder to 1.ext, 2.ext, 3.ext...
/// CLI flags override config values (which are loaded from XML if present).
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Rename ALL files in a folder to 1.ext, 2.ext, 3.ext (keeps each file's extension)"
)]
pub struct Args {
    /// Folder whose files should be renumbered.
    #[arg(value_name = "DIRECTORY", value_hint = ValueHint::DirPath)]
    pub directory_pos: Option<PathBuf>,

    /// Folder to renumber; overrides the positional DIRECTORY.
    #[arg(
        long = "dir",
        short = 'D',
        value_name = "PATH",
        value_hint = ValueHint::DirPath,
        help = "Folder to renumber (overrides positional)"
    )]
    pub directory: Option<PathBuf>,

    /// Skip the confirmation prompt. Required when stdin is not a terminal.
    #[arg(short = 'y', long, help = "Do not ask for confirmation; original names will be lost")]
    pub yes: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Write logs to this file as well as the terminal.
    #[arg(long, value_hint = ValueHint::FilePath, help = "Also write logs to this file")]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Print where seq_rename will look for the config file, then exit.
    #[arg(
        long,
        help = "Print the config file location used by seq_rename and exit"
    )]
    pub print_config: bool,
}

impl Args {
    /// Effective target directory.
    ///
    /// Precedence:
    /// 1) `--dir` if provided
    /// 2) positional `DIRECTORY`
    pub fn resolved_directory(&self) -> Option<PathBuf> {
        self.directory
            .as_deref()
            .or(self.directory_pos.as_deref())
            .map(Self::sanitize_path)
    }

    /// Usage error for when neither `--dir` nor `DIRECTORY` was given.
    pub fn missing_directory_error(&self) -> clap::Error {
        Self::command().error(
            ErrorKind::MissingRequiredArgument,
            "a target folder is required: pass DIRECTORY or --dir PATH",
        )
    }

    /// Strip one pair of quotes wrapping the whole argument (left behind by
    /// PowerShell or CMD) and one trailing separator. Quotes inside the name
    /// are kept, and so are bytes that are not valid UTF-8.
    fn sanitize_path(p: &Path) -> PathBuf {
        let mut bytes = p.as_os_str().as_encoded_bytes();

        if let [first @ (b'\'' | b'"'), .., last] = bytes
            && first == last
        {
            bytes = &bytes[1..bytes.len() - 1];
        }

        // PowerShell often leaves a trailing backslash inside single quotes.
        // Never reduce a root ("/" or "C:\").
        if let [.., prev, b'\\' | b'/'] = bytes
            && *prev != b':'
        {
            bytes = &bytes[..bytes.len() - 1];
        }

        // SAFETY: every cut above is next to an ASCII byte, which is always a
        // valid boundary in the platform's OsStr encoding.
        PathBuf::from(unsafe { OsStr::from_encoded_bytes_unchecked(bytes) })
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if self.json {
            cfg.json_logs = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitize(s: &str) -> PathBuf {
        Args::sanitize_path(Path::new(s))
    }

    #[test]
    fn quotes_and_trailing_separator_are_stripped() {
        assert_eq!(sanitize("'/tmp/pics/'"), PathBuf::from("/tmp/pics"));
        assert_eq!(sanitize("\"/tmp/pics\""), PathBuf::from("/tmp/pics"));
        assert_eq!(sanitize(r"'C:\Photos\'"), PathBuf::from(r"C:\Photos"));
    }

    #[test]
    fn roots_survive_sanitizing() {
        assert_eq!(sanitize("/"), PathBuf::from("/"));
        assert_eq!(sanitize(r"C:\"), PathBuf::from(r"C:\"));
        assert_eq!(sanitize("'/'"), PathBuf::from("/"));
    }

    #[test]
    fn quotes_inside_the_name_are_kept() {
        assert_eq!(sanitize("/tmp/Bob's photos"), PathBuf::from("/tmp/Bob's photos"));
        assert_eq!(sanitize("'/tmp/Bob's photos'"), PathBuf::from("/tmp/Bob's photos"));
        assert_eq!(sanitize("\"/tmp/pics'"), PathBuf::from("\"/tmp/pics'"));
        assert_eq!(sanitize("'"), PathBuf::from("'"));
    }

    #[test]
    fn whitespace_is_part_of_the_name() {
        assert_eq!(sanitize(" /tmp/pics "), PathBuf::from(" /tmp/pics "));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_bytes_are_kept() {
        use std::os::unix::ffi::OsStrExt;
        let raw = Path::new(OsStr::from_bytes(b"'/tmp/caf\xe9/'"));
        let got = Args::sanitize_path(raw);
        assert_eq!(got.as_os_str().as_bytes(), b"/tmp/caf\xe9");
    }
}
