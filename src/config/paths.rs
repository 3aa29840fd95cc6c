//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use anyhow::{Result, anyhow};
use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::CONFIG_ENV;

/// Resolve the config file path.
///
/// - `$SEQ_RENAME_CONFIG` wins; relative values are taken against the cwd and
///   an existing directory means `<dir>/config.xml`.
/// - Otherwise `<config_dir>/seq_rename/config.xml`, falling back to `$HOME/.config`.
pub fn default_config_path() -> Result<PathBuf> {
    if let Some(raw) = env::var_os(CONFIG_ENV) {
        let mut p = PathBuf::from(raw);
        if p.is_relative() {
            p = env::current_dir()?.join(p);
        }
        if p.is_dir() {
            p.push("config.xml");
        }
        return Ok(p);
    }
    if let Some(mut base) = config_dir() {
        base.push("seq_rename");
        base.push("config.xml");
        return Ok(base);
    }
    env::var("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("seq_rename")
                .join("config.xml")
        })
        .map_err(|_| anyhow!("cannot determine a config directory (no config dir and no $HOME)"))
}

/// OS-appropriate default log file path.
///
/// Colocated with an explicit `$SEQ_RENAME_CONFIG`; otherwise under the data dir.
pub fn default_log_path() -> Result<PathBuf> {
    if env::var_os(CONFIG_ENV).is_some() {
        let cfg = default_config_path()?;
        let parent = cfg.parent().unwrap_or_else(|| Path::new("."));
        return Ok(parent.join("seq_rename.log"));
    }
    if let Some(mut base) = data_dir() {
        base.push("seq_rename");
        base.push("seq_rename.log");
        return Ok(base);
    }
    env::var("HOME")
        .map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("seq_rename")
                .join("seq_rename.log")
        })
        .map_err(|_| anyhow!("cannot determine a data directory (no data dir and no $HOME)"))
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.as_os_str().is_empty() {
            break;
        }
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}
