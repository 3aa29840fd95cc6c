use clap::Parser;
use seq_rename::cli::Args;
use seq_rename::config::types::{Config, LogLevel};
use std::path::PathBuf;

#[test]
fn resolved_directory_precedence_flag_over_positional() {
    let args = Args::parse_from(["seq_rename", "--dir", "/tmp/flag_path", "/tmp/pos_path"]);
    let dir = args.resolved_directory().unwrap();
    assert_eq!(dir, PathBuf::from("/tmp/flag_path"));
}

#[test]
fn resolved_directory_uses_positional_when_flag_absent() {
    let args = Args::parse_from(["seq_rename", "/tmp/pos_path"]);
    let dir = args.resolved_directory().unwrap();
    assert_eq!(dir, PathBuf::from("/tmp/pos_path"));
}

#[test]
fn resolved_directory_strips_shell_quoting() {
    let args = Args::parse_from(["seq_rename", "-D", "'/tmp/My Photos/'"]);
    assert_eq!(
        args.resolved_directory().unwrap(),
        PathBuf::from("/tmp/My Photos")
    );
}

#[test]
fn resolved_directory_keeps_apostrophes() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("Bob's photos");
    std::fs::create_dir(&dir).unwrap();

    let args = Args::parse_from([std::ffi::OsStr::new("seq_rename"), dir.as_os_str()]);
    let resolved = args.resolved_directory().unwrap();
    assert_eq!(resolved, dir);
    assert!(resolved.is_dir());

    let quoted = format!("'{}'", dir.display());
    let args = Args::parse_from(["seq_rename", "--dir", quoted.as_str()]);
    assert_eq!(args.resolved_directory().unwrap(), dir);
}

#[test]
fn no_directory_is_a_usage_error() {
    let args = Args::parse_from(["seq_rename"]);
    assert!(args.resolved_directory().is_none());
    let err = args.missing_directory_error();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["seq_rename", "--debug", "--log-level", "quiet"]);
    let lvl = args.effective_log_level().unwrap();
    assert_eq!(lvl, LogLevel::Debug); // --debug wins

    let args = Args::parse_from(["seq_rename", "--log-level", "info"]);
    let lvl = args.effective_log_level().unwrap();
    assert_eq!(lvl, LogLevel::Info);

    let args = Args::parse_from(["seq_rename", "--log-level", "loud"]);
    assert!(args.effective_log_level().is_none());
}

#[test]
fn apply_overrides_sets_flags() {
    let args = Args::parse_from([
        "seq_rename",
        "--log-level",
        "quiet",
        "--log-file",
        "/var/tmp/run.log",
        "--json",
        "-y",
        "/pics",
    ]);
    let mut cfg = Config::default();
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.log_level, LogLevel::Quiet);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/var/tmp/run.log")));
    assert!(cfg.json_logs);
    assert!(args.yes);
}

#[test]
fn apply_overrides_leaves_unset_values_alone() {
    let args = Args::parse_from(["seq_rename", "/pics"]);
    let mut cfg = Config {
        log_level: LogLevel::Info,
        log_file: None,
        json_logs: true,
    };
    args.apply_overrides(&mut cfg);
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, None);
    assert!(cfg.json_logs);
}
