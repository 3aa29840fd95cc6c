//! Platform-specific helpers.
//! This module hides OS differences (Unix/Windows) behind a uniform API so
//! the rest of the codebase can remain platform-agnostic.

pub(crate) mod temp;
#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::{
    extended_length_path, fsync_dir, open_log_file_secure_append, set_dir_mode_0700,
    set_file_mode_0600, write_config_secure_new_0600,
};

#[cfg(not(unix))]
pub use windows::{
    extended_length_path, fsync_dir, open_log_file_secure_append, set_dir_mode_0700,
    set_file_mode_0600, write_config_secure_new_0600,
};
