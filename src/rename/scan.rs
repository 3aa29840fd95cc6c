//! Directory listing and eligibility.
//!
//! Only direct children are considered. An entry is eligible when it is a
//! regular file (symlinks followed for the check, so a link to a directory is
//! skipped) and its lowercased name is not on the ignore list.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::RenameError;
use crate::normalize::TargetDir;

use super::naming::extension_of;

/// Names this tool answers to, besides whatever the running binary is called.
const PROGRAM_NAMES: &[&str] = &["seq_rename", "seq_rename.exe"];
/// OS metadata files that must keep their names.
const SYSTEM_FILES: &[&str] = &["desktop.ini", "thumbs.db"];

/// Fixed set of names (case-insensitive) that are never renamed.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    names: HashSet<String>,
}

impl IgnoreList {
    /// Built-in names plus `program`, the renamer's own file name.
    pub fn with_program_name(program: Option<&OsStr>) -> Self {
        let mut names: HashSet<String> = PROGRAM_NAMES
            .iter()
            .chain(SYSTEM_FILES)
            .map(|s| s.to_string())
            .collect();
        if let Some(p) = program {
            names.insert(p.to_string_lossy().to_lowercase());
        }
        Self { names }
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.contains(&name.to_string_lossy().to_lowercase())
    }
}

impl Default for IgnoreList {
    /// Built-ins plus the current executable's file name, when it can be determined.
    fn default() -> Self {
        let exe = std::env::current_exe().ok();
        Self::with_program_name(exe.as_deref().and_then(|p| p.file_name()))
    }
}

/// A direct child of the target directory that is eligible for renaming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    name: OsString,
}

impl FileEntry {
    pub fn new(name: OsString) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn extension(&self) -> &OsStr {
        extension_of(&self.name)
    }
}

/// List eligible files of `dir`, in no particular order.
///
/// Any failure to list (missing, not a directory, permission denied) is a
/// `DirectoryAccess` error. An entry whose metadata cannot be read is skipped.
pub fn list_eligible(dir: &TargetDir, ignore: &IgnoreList) -> Result<Vec<FileEntry>, RenameError> {
    let access_error = |source: io::Error| RenameError::DirectoryAccess {
        path: dir.path().to_path_buf(),
        source,
    };

    // walkdir yields a non-directory root as a depth-0 entry (filtered out by
    // min_depth) instead of failing, so check up front.
    let meta = fs::metadata(dir.path()).map_err(access_error)?;
    if !meta.is_dir() {
        return Err(access_error(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }

    let mut entries = Vec::new();
    for item in WalkDir::new(dir.path())
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let item = item.map_err(|e| access_error(io::Error::from(e)))?;
        let name = item.file_name();
        match fs::metadata(item.path()) {
            Ok(m) if m.is_file() => {}
            Ok(_) => {
                debug!(name = %name.to_string_lossy(), "skipping non-file entry");
                continue;
            }
            Err(e) => {
                debug!(name = %name.to_string_lossy(), error = %e, "skipping unreadable entry");
                continue;
            }
        }
        if ignore.contains(name) {
            debug!(name = %name.to_string_lossy(), "skipping ignored file");
            continue;
        }
        entries.push(FileEntry::new(name.to_os_string()));
    }
    Ok(entries)
}
