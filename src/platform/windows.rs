//! Windows implementations of platform helpers (best-effort, minimal ACL awareness).
//!
//! Notes:
//! - Windows lacks POSIX mode semantics; we do not attempt ACL management here.
//! - Paths handed to the renamer are switched to the `\\?\` form so that
//!   names deeper than MAX_PATH (260) still work.

use anyhow::{bail, Result};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf, Prefix};

use super::temp::tmp_config_sibling_name;

const VERBATIM: &str = r"\\?\";
const VERBATIM_UNC: &str = r"\\?\UNC\";

/// Rewrite an absolute, already-normalized path into its extended-length form.
///
/// `C:\dir` becomes `\\?\C:\dir` and `\\server\share\dir` becomes
/// `\\?\UNC\server\share\dir`. Verbatim and device paths are returned unchanged,
/// as are relative paths (the prefix disables all further normalization, so it
/// is only valid on a fully resolved path).
pub fn extended_length_path(path: &Path) -> PathBuf {
    let mut components = path.components();
    let prefix = match components.next() {
        Some(Component::Prefix(p)) => p,
        _ => return path.to_path_buf(),
    };

    let mut out = match prefix.kind() {
        Prefix::Disk(_) => {
            let mut s = OsString::from(VERBATIM);
            s.push(prefix.as_os_str());
            s
        }
        Prefix::UNC(server, share) => {
            let mut s = OsString::from(VERBATIM_UNC);
            s.push(server);
            s.push(r"\");
            s.push(share);
            s
        }
        _ => return path.to_path_buf(),
    };

    let mut at_separator = false;
    for component in components {
        match component {
            Component::RootDir => {
                out.push(r"\");
                at_separator = true;
            }
            other => {
                if !at_separator {
                    out.push(r"\");
                }
                out.push(other.as_os_str());
                at_separator = false;
            }
        }
    }
    PathBuf::from(out)
}

/// Directory fsync is not exposed through std on Windows; renames are journaled by NTFS.
pub fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

/// Open log file for appending (best-effort; no symlink defense available via std on Windows).
pub fn open_log_file_secure_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Write a new config file atomically (create_new) using a temp file + rename.
/// Fails if the target already exists. Best-effort security (no ACL changes).
pub fn write_config_secure_new_0600(path: &Path, contents: &[u8]) -> Result<()> {
    if path.exists() {
        bail!("Config file already exists: {}", path.display());
    }
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "config path has no parent"))?;
    fs::create_dir_all(parent)?;

    let tmp = tmp_config_sibling_name(path);
    let mut f = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp)?;
    f.write_all(contents)?;
    f.sync_all()?;
    drop(f);
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

/// No-op on Windows; POSIX-style directory modes are not applicable.
pub fn set_dir_mode_0700(_path: &Path) -> io::Result<()> {
    Ok(())
}

/// No-op on Windows; POSIX-style file modes are not applicable.
pub fn set_file_mode_0600(_path: &Path) -> io::Result<()> {
    Ok(())
}
