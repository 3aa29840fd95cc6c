//! Sequential renaming of a directory's files.
//!
//! - `scan`: list eligible files (regular, not ignored)
//! - `order`: numeric-rank-then-name ordering
//! - `naming`: temp/final name formats and extension rules
//! - `atomic`: rename that refuses to replace anything
//! - `engine`: the two-phase run and its report
//! - `observer`: log/progress/status event contract

mod atomic;
mod engine;
mod helpers;
pub mod naming;
pub mod observer;
pub mod order;
pub mod scan;

pub use engine::{Outcome, Renamed, Renamer, RunReport, process_rename};
pub use helpers::{io_error_with_help, io_error_with_help_io};
pub use observer::{Callbacks, Notice, RenameObserver, Status};
pub use scan::{FileEntry, IgnoreList, list_eligible};
