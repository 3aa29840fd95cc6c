//! Outbound event contract of a run.
//!
//! The engine knows nothing about terminals or windows: it reports through a
//! [`RenameObserver`], synchronously, on the thread that called `run`. Hosts
//! that render elsewhere (a UI thread, a channel) marshal the events themselves.

use std::fmt;

/// Short human-readable state of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Scanning,
    AccessError,
    NoFiles,
    Quarantining,
    Numbering,
    Completed,
    CriticalError,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Scanning => "Scanning files...",
            Status::AccessError => "Error Accessing Folder",
            Status::NoFiles => "No files found",
            Status::Quarantining => "Phase 1/2 - Safe Temp Rename...",
            Status::Numbering => "Phase 2/2 - Numbering (1, 2, 3...)...",
            Status::Completed => "Completed",
            Status::CriticalError => "Critical Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::AccessError | Status::CriticalError)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Acknowledgment the host should put in front of the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error { title: String, message: String },
}

/// Receiver for run events.
pub trait RenameObserver {
    /// One line for the detailed log (no trailing newline).
    fn log(&mut self, message: &str);
    /// Overall progress, 0..=100.
    fn progress(&mut self, percent: u8);
    fn status(&mut self, status: Status);
    /// Final acknowledgment; ignored unless the host can show one.
    fn notify(&mut self, _notice: Notice) {}
}

/// Observer built from three plain callbacks.
///
/// Status lines are rendered as `Status: <text>`. Notices have no callback of
/// their own and go to the log one: the success text as is, errors as
/// `<title>: <message>`.
pub struct Callbacks<L, P, S> {
    log: L,
    progress: P,
    status: S,
}

impl<L, P, S> Callbacks<L, P, S>
where
    L: FnMut(&str),
    P: FnMut(u8),
    S: FnMut(&str),
{
    pub fn new(log: L, progress: P, status: S) -> Self {
        Self {
            log,
            progress,
            status,
        }
    }
}

impl<L, P, S> RenameObserver for Callbacks<L, P, S>
where
    L: FnMut(&str),
    P: FnMut(u8),
    S: FnMut(&str),
{
    fn log(&mut self, message: &str) {
        (self.log)(message)
    }

    fn progress(&mut self, percent: u8) {
        (self.progress)(percent)
    }

    fn status(&mut self, status: Status) {
        (self.status)(&format!("Status: {status}"))
    }

    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Success(message) => (self.log)(&message),
            Notice::Error { title, message } => (self.log)(&format!("{title}: {message}")),
        }
    }
}
