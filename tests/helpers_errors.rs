use std::io;
use std::path::Path;

use seq_rename::rename::{io_error_with_help, io_error_with_help_io};

#[test]
fn notfound_fallback_hint_includes_path() {
    let p = Path::new("/nonexistent/path/for/test");
    let f = io_error_with_help("open", p);
    let err = f(io::Error::from(io::ErrorKind::NotFound));
    let msg = format!("{}", err);
    assert!(msg.contains("open"));
    assert!(msg.contains(p.to_string_lossy().as_ref()));
    assert!(msg.contains("path not found"));
}

#[cfg(unix)]
#[test]
fn erofs_hint_present() {
    let p = Path::new("/tmp");
    let f = io_error_with_help("rename", p);
    let err = f(io::Error::from_raw_os_error(libc::EROFS));
    let msg = format!("{}", err);
    assert!(msg.contains("read-only filesystem"), "msg was: {}", msg);
    assert!(msg.contains("os code"), "should include os code in message");
}

#[cfg(unix)]
#[test]
fn loop_and_name_too_long_hints() {
    let p = Path::new("/tmp");
    let m1 = format!("{}", io_error_with_help("op", p)(io::Error::from_raw_os_error(libc::ELOOP)));
    let m2 = format!(
        "{}",
        io_error_with_help("op", p)(io::Error::from_raw_os_error(libc::ENAMETOOLONG))
    );
    assert!(m1.contains("symlink cycle"));
    assert!(m2.contains("too long"));
}

#[cfg(unix)]
#[test]
fn fd_limit_hints() {
    let p = Path::new("/tmp");
    let m1 = format!("{}", io_error_with_help("op", p)(io::Error::from_raw_os_error(libc::EMFILE)));
    let m2 = format!("{}", io_error_with_help("op", p)(io::Error::from_raw_os_error(libc::ENFILE)));
    assert!(m1.contains("descriptor limit"));
    assert!(m2.contains("file table"));
}

#[cfg(unix)]
#[test]
fn directory_in_the_way_hint() {
    let p = Path::new("/tmp/2.png");
    let msg = format!(
        "{}",
        io_error_with_help_io("rename", p)(io::Error::from_raw_os_error(libc::EISDIR))
    );
    assert!(msg.contains("directory occupies"), "msg was: {msg}");
}

#[test]
fn io_adapter_preserves_kind() {
    let p = Path::new("/tmp/test.txt");
    let f = io_error_with_help_io("rename", p);
    let e = io::Error::from(io::ErrorKind::AlreadyExists);
    let wrapped = f(e);
    assert_eq!(wrapped.kind(), io::ErrorKind::AlreadyExists);
    let msg = format!("{}", wrapped);
    assert!(msg.contains("already exists"));
}
