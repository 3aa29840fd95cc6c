//! Single-entry rename that never replaces an existing name.
//! - Refuses when anything (file, dir, dangling symlink) already holds `dst`.
//!   POSIX rename(2) would silently replace a file there.
//! - On Unix, best-effort fsync of the directory after the rename.

use std::fs;
use std::io;
use std::path::Path;

use crate::errors::RenameError;
use crate::platform::fsync_dir;

use super::helpers::io_error_with_help_io;

pub(crate) fn rename_no_clobber(src: &Path, dst: &Path) -> io::Result<()> {
    match fs::symlink_metadata(dst) {
        Ok(_) => return Err(RenameError::TargetExists(dst.to_path_buf()).into()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(io_error_with_help_io("inspect rename target", dst)(e)),
    }

    fs::rename(src, dst).map_err(io_error_with_help_io("rename", src))?;

    if let Some(parent) = dst.parent() {
        // Ignore fsync errors to avoid turning a successful rename into a failure.
        let _ = fsync_dir(parent);
    }
    Ok(())
}
