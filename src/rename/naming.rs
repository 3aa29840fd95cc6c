//! Temp and final name construction.
//!
//! Formats:
//! - temp:  `__temp_` + 32 lowercase hex chars (a v4 UUID, 122 random bits plus
//!   fixed version bits) + extension
//! - final: decimal counter (no padding) + extension
//!
//! The extension is taken the way `os.path.splitext` takes it: leading dots of
//! the name are not separators, so `.bashrc` has no extension while
//! `archive.tar.gz` has `.gz` and `photo.` has `.`.

use std::ffi::{OsStr, OsString};
use uuid::Uuid;

pub const TEMP_PREFIX: &str = "__temp_";

/// Extension of `name`, including its leading dot; empty when there is none.
pub fn extension_of(name: &OsStr) -> &OsStr {
    let bytes = name.as_encoded_bytes();
    let lead = bytes.iter().take_while(|&&b| b == b'.').count();
    match bytes[lead..].iter().rposition(|&b| b == b'.') {
        // SAFETY: the slice starts at an ASCII '.' taken from `name`'s own
        // encoded bytes, so it begins and ends on valid boundaries.
        Some(pos) => unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[lead + pos..]) },
        None => OsStr::new(""),
    }
}

/// Fresh quarantine name carrying `ext`.
pub fn temp_name(ext: &OsStr) -> OsString {
    let mut name = OsString::from(TEMP_PREFIX);
    name.push(Uuid::new_v4().simple().to_string());
    name.push(ext);
    name
}

/// Sequential name `<n><ext>`.
pub fn final_name(n: u64, ext: &OsStr) -> OsString {
    let mut name = OsString::from(n.to_string());
    name.push(ext);
    name
}

/// True for names produced by [`temp_name`].
pub fn is_temp_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    let Some(rest) = bytes.strip_prefix(TEMP_PREFIX.as_bytes()) else {
        return false;
    };
    rest.len() >= 32 && rest[..32].iter().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}
