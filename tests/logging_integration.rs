use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use assert_fs::prelude::*;
use seq_rename::platform::open_log_file_secure_append;
use seq_rename::{IgnoreList, RenameObserver, Renamer, Status, normalize_dir};
use std::path::PathBuf;
use tempfile::tempdir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt as tsfmt, registry};

/// A simple writer that appends written bytes into an in-memory Vec<u8>.
/// We wrap the Vec in an Arc<Mutex<...>> so the MakeWriter closure can clone it.
#[derive(Clone)]
struct BufferWriter(Arc<Mutex<Vec<u8>>>);

impl Write for BufferWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self.0.lock().unwrap();
        guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Silent;

impl RenameObserver for Silent {
    fn log(&mut self, _message: &str) {}
    fn progress(&mut self, _percent: u8) {}
    fn status(&mut self, _status: Status) {}
}

#[test]
fn engine_events_carry_structured_fields() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let make_writer = {
        let buf = buf.clone();
        move || BufferWriter(buf.clone())
    };
    let layer = tsfmt::layer()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_target(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new("debug")).with(layer);

    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("a1.txt").touch().unwrap();
    dir.child("b2.txt").touch().unwrap();
    dir.child("2.txt").create_dir_all().unwrap();
    let target = normalize_dir(dir.path().to_str().unwrap());

    // Scoped, so the global subscriber stays untouched for other tests.
    let dispatch = tracing::Dispatch::new(subscriber);
    tracing::dispatcher::with_default(&dispatch, || {
        Renamer::new(IgnoreList::with_program_name(None)).run(&target, &mut Silent);
    });

    let contents = {
        let guard = buf.lock().unwrap();
        String::from_utf8_lossy(&guard[..]).to_string()
    };
    assert!(contents.contains("Starting rename"), "contents={contents}");
    assert!(contents.contains("files=2"), "contents={contents}");
    assert!(contents.contains("quarantined"), "contents={contents}");
    assert!(contents.contains("Rename failed; file skipped"), "contents={contents}");
    assert!(contents.contains("kind=\"per_file_rename\""), "contents={contents}");
    assert!(contents.contains("Rename completed"), "contents={contents}");
}

#[test]
fn file_logging_writes_to_custom_path_and_verifies_output() {
    let td = tempdir().expect("tempdir");
    let log_path: PathBuf = td.path().join("seq_rename_test.log");

    // The production logger refuses symlinked ancestors (common for macOS temp dirs).
    if seq_rename::path_has_symlink_ancestor(&log_path).unwrap() {
        eprintln!(
            "Skipping file logging test: path has symlink ancestor: {}",
            log_path.display()
        );
        return;
    }

    let file = open_log_file_secure_append(&log_path).expect("open_log_file_secure_append");
    let (writer, guard): (tracing_appender::non_blocking::NonBlocking, WorkerGuard) =
        tracing_appender::non_blocking(file);

    let file_layer = tsfmt::layer()
        .with_writer(move || writer.clone())
        .with_target(false)
        .compact();
    let subscriber = registry().with(EnvFilter::new("info")).with(file_layer);
    let dispatch = tracing::Dispatch::new(subscriber);

    tracing::dispatcher::with_default(&dispatch, || {
        tracing::info!("file-logging-test: written");
    });

    // Drop the guard to flush the non-blocking worker
    drop(guard);

    let contents = std::fs::read_to_string(&log_path).expect("read log file");
    assert!(
        contents.contains("file-logging-test"),
        "log file did not contain expected text; contents={}",
        contents
    );

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(&log_path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }
}
