//! Target directory normalization.
//!
//! Turns the directory string supplied by the user into the root every later
//! filesystem call is built from:
//! - relative input is made absolute against the working directory,
//! - `.` and `..` segments and doubled separators are folded away lexically,
//! - on Windows the extended-length `\\?\` marker is prepended.
//!
//! Nothing here touches the filesystem beyond reading the working directory;
//! a path that does not exist normalizes fine and fails later, when listed.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::platform::extended_length_path;

/// Normalized target directory for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDir {
    root: PathBuf,
}

impl TargetDir {
    /// Root path to join entry names onto (extended-length form on Windows).
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Join a direct-child name onto the root.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.root.join(name)
    }

    /// User-facing form, without any verbatim prefix.
    pub fn display(&self) -> TargetDisplay<'_> {
        TargetDisplay(dunce::simplified(&self.root))
    }
}

pub struct TargetDisplay<'a>(&'a Path);

impl fmt::Display for TargetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Normalize a user-supplied directory path. Never fails.
pub fn normalize_dir(raw: &str) -> TargetDir {
    normalize_dir_path(Path::new(raw))
}

/// Same as [`normalize_dir`] for paths that may not be valid UTF-8.
pub fn normalize_dir_path(given: &Path) -> TargetDir {
    let given = if given.as_os_str().is_empty() {
        Path::new(".")
    } else {
        given
    };
    let absolute = std::path::absolute(given).unwrap_or_else(|_| given.to_path_buf());
    let lexical = lexical_normalize(&absolute);
    TargetDir {
        root: extended_length_path(&lexical),
    }
}

/// Fold `.`/`..` segments without consulting the filesystem.
///
/// `..` directly under a root is dropped; leading `..` on a relative path is kept.
pub fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().map(|c| c.as_os_str()).collect()
}
