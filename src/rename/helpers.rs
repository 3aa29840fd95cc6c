//! I/O helper utilities.
//!
//! Provides small adapters to enrich io::Error with actionable context/hints,
//! usable with map_err in both io::Result and anyhow::Result code paths.
//!
//! Usage:
//!   // in functions returning anyhow::Result<_>
//!   fs::read_to_string(p).map_err(io_error_with_help("read config", p))?;
//!
//!   // in functions returning io::Result<_>
//!   fs::rename(a, b).map_err(io_error_with_help_io("rename", a))?;

use anyhow::anyhow;
use std::io;
use std::path::Path;

const PERMISSION: &str = "permission denied, check ownership and write permissions on the folder.";
const NOT_FOUND: &str = "path not found, the file may have been moved or deleted.";
const EXISTS: &str = "target already exists.";

/// Hint for a raw OS error code, if we have one.
#[cfg(unix)]
fn os_hint(code: i32) -> Option<&'static str> {
    Some(match code {
        libc::EACCES | libc::EPERM => PERMISSION,
        libc::EBUSY => "resource busy, another process may be using the file.",
        libc::ENOENT => NOT_FOUND,
        libc::EEXIST | libc::ENOTEMPTY => EXISTS,
        libc::EISDIR => "a directory occupies the target name.",
        libc::ENOTDIR => "not a directory.",
        libc::EROFS => "read-only filesystem, cannot rename here.",
        libc::ELOOP => "too many symbolic link levels (ELOOP), possible symlink cycle.",
        libc::ENAMETOOLONG => "filename or path too long, shorten the name or its extension.",
        libc::EMFILE => "process file descriptor limit reached, close files or raise limits.",
        libc::ENFILE => "system-wide file table overflow, reduce open files.",
        _ => return None,
    })
}

#[cfg(windows)]
fn os_hint(code: i32) -> Option<&'static str> {
    Some(match code {
        5 => "access denied, check permissions.",            // ERROR_ACCESS_DENIED
        32 => "sharing violation, file is in use.",          // ERROR_SHARING_VIOLATION
        2 | 3 => NOT_FOUND,                                  // FILE / PATH NOT FOUND
        80 | 183 => EXISTS,                                  // ERROR_FILE_EXISTS / ALREADY_EXISTS
        19 => "write protected / read-only media.",          // ERROR_WRITE_PROTECT
        206 => "filename or path too long.",                 // ERROR_FILENAME_EXCED_RANGE
        4 => "too many open files, close handles or increase limit.", // ERROR_TOO_MANY_OPEN_FILES
        _ => return None,
    })
}

#[cfg(not(any(unix, windows)))]
fn os_hint(_code: i32) -> Option<&'static str> {
    None
}

/// Hint for errors that carry no OS code (synthesized by std or by us).
fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => Some(PERMISSION),
        io::ErrorKind::NotFound => Some(NOT_FOUND),
        io::ErrorKind::AlreadyExists => Some(EXISTS),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => {
            Some("busy/timed out, retry after the other process finishes.")
        }
        _ => None,
    }
}

/// `<op> '<path>': <error>[; hint][ [os code: N]]`
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    let hint = match e.raw_os_error() {
        Some(code) => os_hint(code),
        None => kind_hint(e.kind()),
    };
    if let Some(hint) = hint {
        msg.push_str("; ");
        msg.push_str(hint);
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {code}]"));
    }
    msg
}

/// Adapter for anyhow::Result code.
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> anyhow::Error.
pub fn io_error_with_help<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> anyhow::Error + 'a {
    move |e: io::Error| anyhow!(build_message(op, path, &e))
}

/// Adapter for io::Result code (when the surrounding function returns io::Result).
/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> io::Error
/// with enriched context in the message while preserving the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}
