//! The renumbering run.
//!
//! enumerate -> order -> Phase 1 (every file to a random `__temp_` name) ->
//! Phase 2 (temp names to 1, 2, 3...) -> completion.
//!
//! Per-file rename failures are logged and skipped; the file stays under
//! whatever name it had (original after a Phase 1 failure, temp after a
//! Phase 2 failure). Listing failures and anything unexpected end the run.

use std::any::Any;
use std::ffi::{OsStr, OsString};
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error, info, warn};

use crate::errors::{Phase, RenameError};
use crate::normalize::{TargetDir, normalize_dir};

use super::atomic::rename_no_clobber;
use super::naming::{extension_of, final_name, temp_name};
use super::observer::{Callbacks, Notice, RenameObserver, Status};
use super::order::sort_entries;
use super::scan::{FileEntry, IgnoreList, list_eligible};

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both phases ran (individual files may still have failed).
    Completed,
    /// Nothing eligible; nothing renamed.
    NoFiles,
    /// The directory could not be listed; nothing renamed.
    AccessFailed,
    /// An unexpected failure stopped the run part-way.
    Aborted,
}

/// One file that made it through both phases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Renamed {
    pub original: OsString,
    pub final_name: OsString,
}

/// File parked under its temp name, waiting for Phase 2.
#[derive(Debug)]
struct Quarantined {
    original: OsString,
    temp: OsString,
}

/// Everything a host may want to know after a run.
#[derive(Debug)]
pub struct RunReport {
    pub outcome: Outcome,
    /// Eligible files found by the scan.
    pub total: usize,
    /// In assignment order.
    pub renamed: Vec<Renamed>,
    /// `RenameError::PerFile` values, in the order they happened.
    pub failures: Vec<RenameError>,
    /// Set for `AccessFailed` and `Aborted`.
    pub fatal: Option<RenameError>,
}

impl RunReport {
    fn new() -> Self {
        Self {
            outcome: Outcome::Aborted,
            total: 0,
            renamed: Vec::new(),
            failures: Vec::new(),
            fatal: None,
        }
    }

    /// Per-file failures of one phase.
    pub fn failures_in(&self, phase: Phase) -> impl Iterator<Item = &RenameError> + '_ {
        self.failures
            .iter()
            .filter(move |e| matches!(e, RenameError::PerFile { phase: p, .. } if *p == phase))
    }

    /// True when the run finished and no file was left behind.
    pub fn is_clean(&self) -> bool {
        matches!(self.outcome, Outcome::Completed | Outcome::NoFiles) && self.failures.is_empty()
    }
}

/// Phase 1 covers 0..=50, measured against every scanned file.
fn quarantine_progress(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 50;
    }
    (done.min(total) * 50 / total) as u8
}

/// Phase 2 covers 50..=100, measured against the files that reached it.
fn numbering_progress(done: usize, survivors: usize) -> u8 {
    if survivors == 0 {
        return 100;
    }
    50 + (done.min(survivors) * 50 / survivors) as u8
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// The rename engine. Holds only the ignore list; every run is independent.
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    ignore: IgnoreList,
}

impl Renamer {
    pub fn new(ignore: IgnoreList) -> Self {
        Self { ignore }
    }

    /// Renumber every eligible file in `dir`, reporting through `observer`.
    ///
    /// Never returns an error: fatal conditions are reported to the observer
    /// and recorded in the returned report.
    pub fn run<O: RenameObserver + ?Sized>(&self, dir: &TargetDir, observer: &mut O) -> RunReport {
        let mut report = RunReport::new();
        observer.log(&format!("--- TARGET: {} ---", dir.display()));
        observer.status(Status::Scanning);

        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            self.execute(dir, &mut *observer, &mut report)
        }));
        let fatal = match attempt {
            Ok(Ok(())) => return report,
            Ok(Err(e)) => e,
            Err(payload) => RenameError::Unclassified(panic_message(payload)),
        };

        match &fatal {
            RenameError::DirectoryAccess { source, .. } => {
                error!(code = fatal.code(), kind = fatal.kind(), error = %fatal, "Cannot list target directory");
                report.outcome = Outcome::AccessFailed;
                observer.status(Status::AccessError);
                observer.log(&format!("{fatal}"));
                observer.notify(Notice::Error {
                    title: "Error".into(),
                    message: format!("Could not access path:\n{source}"),
                });
            }
            _ => {
                error!(code = fatal.code(), kind = fatal.kind(), error = %fatal, "Run aborted");
                report.outcome = Outcome::Aborted;
                observer.status(Status::CriticalError);
                observer.log(&format!("CRITICAL ERROR: {fatal}"));
                observer.notify(Notice::Error {
                    title: "Critical Error".into(),
                    message: format!("An unexpected error occurred:\n{fatal}"),
                });
            }
        }
        report.fatal = Some(fatal);
        report
    }

    fn execute<O: RenameObserver + ?Sized>(
        &self,
        dir: &TargetDir,
        observer: &mut O,
        report: &mut RunReport,
    ) -> Result<(), RenameError> {
        let mut entries = list_eligible(dir, &self.ignore)?;
        if entries.is_empty() {
            info!(dir = %dir.display(), "No eligible files");
            report.outcome = Outcome::NoFiles;
            observer.progress(100);
            observer.status(Status::NoFiles);
            observer.log("Folder is empty or contains no valid files.");
            return Ok(());
        }

        sort_entries(&mut entries);
        report.total = entries.len();
        info!(dir = %dir.display(), files = entries.len(), "Starting rename");
        observer.log(&format!("Found {} files. Starting Rename...", entries.len()));

        observer.status(Status::Quarantining);
        let quarantined = self.quarantine(dir, &entries, observer, report);

        observer.status(Status::Numbering);
        self.number(dir, &quarantined, observer, report);

        report.outcome = Outcome::Completed;
        info!(
            renamed = report.renamed.len(),
            failed = report.failures.len(),
            "Rename completed"
        );
        observer.progress(100);
        observer.status(Status::Completed);
        observer.log("--- ALL DONE ---");
        observer.notify(Notice::Success("All files renamed to 1, 2, 3...!".into()));
        Ok(())
    }

    /// Phase 1: move each file to a fresh temp name. Returns survivors in sort order.
    fn quarantine<O: RenameObserver + ?Sized>(
        &self,
        dir: &TargetDir,
        entries: &[FileEntry],
        observer: &mut O,
        report: &mut RunReport,
    ) -> Vec<Quarantined> {
        let total = entries.len();
        let mut parked = Vec::with_capacity(total);

        for (index, entry) in entries.iter().enumerate() {
            let temp = temp_name(entry.extension());
            match rename_no_clobber(&dir.join(entry.name()), &dir.join(&temp)) {
                Ok(()) => {
                    debug!(from = %entry.name().to_string_lossy(), to = %temp.to_string_lossy(), "quarantined");
                    parked.push(Quarantined {
                        original: entry.name().to_os_string(),
                        temp,
                    });
                }
                Err(source) => {
                    observer.log(&format!(
                        "Error in Phase 1 for {}: {}",
                        entry.name().to_string_lossy(),
                        source
                    ));
                    self.record_failure(Phase::Quarantine, entry.name(), source, report);
                }
            }
            observer.progress(quarantine_progress(index + 1, total));
        }
        parked
    }

    /// Phase 2: temp names to sequential names.
    ///
    /// The counter only advances on success, so the file after a failure
    /// takes the number the failed one was meant to get.
    fn number<O: RenameObserver + ?Sized>(
        &self,
        dir: &TargetDir,
        parked: &[Quarantined],
        observer: &mut O,
        report: &mut RunReport,
    ) {
        let survivors = parked.len();
        let mut counter: u64 = 1;

        for (index, file) in parked.iter().enumerate() {
            let target = final_name(counter, extension_of(&file.temp));
            match rename_no_clobber(&dir.join(&file.temp), &dir.join(&target)) {
                Ok(()) => {
                    debug!(from = %file.original.to_string_lossy(), to = %target.to_string_lossy(), "numbered");
                    observer.log(&format!("Renamed: {}", target.to_string_lossy()));
                    report.renamed.push(Renamed {
                        original: file.original.clone(),
                        final_name: target,
                    });
                    counter += 1;
                }
                Err(source) => {
                    observer.log(&format!(
                        "Error in Phase 2 for {}: {}",
                        file.temp.to_string_lossy(),
                        source
                    ));
                    self.record_failure(Phase::Numbering, &file.temp, source, report);
                }
            }
            observer.progress(numbering_progress(index + 1, survivors));
        }
    }

    fn record_failure(
        &self,
        phase: Phase,
        name: &OsStr,
        source: std::io::Error,
        report: &mut RunReport,
    ) {
        let err = RenameError::PerFile {
            phase,
            name: name.to_os_string(),
            source,
        };
        warn!(code = err.code(), kind = err.kind(), %phase, error = %err, "Rename failed; file skipped");
        report.failures.push(err);
    }
}

/// Callback entry point: normalize `path` and renumber its files.
///
/// Everything is reported through the three callbacks; nothing is returned.
pub fn process_rename<L, P, S>(path: &str, log: L, progress: P, status: S)
where
    L: FnMut(&str),
    P: FnMut(u8),
    S: FnMut(&str),
{
    let dir = normalize_dir(path);
    let mut observer = Callbacks::new(log, progress, status);
    Renamer::default().run(&dir, &mut observer);
}
