//! Core library for `seq_rename`.
//!
//! Renames every file in one directory to `1.ext`, `2.ext`, ... ordered by the
//! first number embedded in each name. Renames go through unique temp names
//! first, so no file is ever overwritten along the way.
//!
//! ```no_run
//! use seq_rename::process_rename;
//!
//! process_rename(
//!     "/home/me/Pictures/trip",
//!     |line| println!("{line}"),
//!     |pct| eprintln!("{pct}%"),
//!     |status| eprintln!("{status}"),
//! );
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod normalize;
pub mod output;
pub mod platform;
pub mod rename;

pub use config::{
    Config, LoadResult, LogLevel, create_template_config, default_config_path, default_log_path,
    load_config_from_xml_path, load_or_init, path_has_symlink_ancestor,
};
pub use errors::{Phase, RenameError};
pub use normalize::{TargetDir, normalize_dir, normalize_dir_path};
pub use rename::{
    Callbacks, IgnoreList, Notice, Outcome, RenameObserver, Renamed, Renamer, RunReport, Status,
    process_rename,
};
