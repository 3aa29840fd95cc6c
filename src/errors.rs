//! Typed error definitions for seq_rename.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which rename pass a per-file failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Original name -> temp name.
    Quarantine,
    /// Temp name -> sequential name.
    Numbering,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Quarantine => f.write_str("Phase 1"),
            Phase::Numbering => f.write_str("Phase 2"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Could not access path {}: {source}", path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{phase} rename of {} failed: {source}", name.to_string_lossy())]
    PerFile {
        phase: Phase,
        name: OsString,
        #[source]
        source: io::Error,
    },

    #[error("Refusing to overwrite existing entry: {}", .0.display())]
    TargetExists(PathBuf),

    #[error("{0}")]
    Unclassified(String),
}

impl RenameError {
    /// Stable numeric code for structured logs.
    pub fn code(&self) -> u16 {
        match self {
            RenameError::DirectoryAccess { .. } => 10,
            RenameError::PerFile { .. } => 20,
            RenameError::TargetExists(_) => 21,
            RenameError::Unclassified(_) => 99,
        }
    }

    /// Short machine-friendly label, used as the `kind` field in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            RenameError::DirectoryAccess { .. } => "directory_access",
            RenameError::PerFile { .. } => "per_file_rename",
            RenameError::TargetExists(_) => "target_exists",
            RenameError::Unclassified(_) => "unclassified",
        }
    }
}

impl From<RenameError> for io::Error {
    fn from(e: RenameError) -> Self {
        let kind = match &e {
            RenameError::TargetExists(_) => io::ErrorKind::AlreadyExists,
            RenameError::DirectoryAccess { source, .. } | RenameError::PerFile { source, .. } => {
                source.kind()
            }
            RenameError::Unclassified(_) => io::ErrorKind::Other,
        };
        io::Error::new(kind, e.to_string())
    }
}
