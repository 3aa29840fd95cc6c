use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use seq_rename::config::types::LogLevel;
use seq_rename::load_config_from_xml_path;

#[test]
fn reads_all_fields() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(
        &cfg_path,
        r#"<config>
  <log_level>info</log_level>
  <log_file>/var/log/seq_rename.log</log_file>
  <json_logs>true</json_logs>
</config>"#,
    )
    .unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).expect("valid config");
    assert_eq!(cfg.log_level, LogLevel::Info);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/var/log/seq_rename.log")));
    assert!(cfg.json_logs);
}

#[test]
fn empty_log_file_keeps_default() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><log_file>   </log_file></config>").unwrap();

    let cfg = load_config_from_xml_path(&cfg_path).expect("valid config");
    assert_eq!(cfg.log_level, LogLevel::Normal);
    assert_eq!(cfg.log_file, seq_rename::default_log_path().ok());
}

#[test]
fn malformed_xml_is_an_error_naming_the_file() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("broken.xml");
    fs::write(&cfg_path, "<config><log_level>debug</config>").unwrap();

    let err = load_config_from_xml_path(&cfg_path).unwrap_err();
    assert!(format!("{err:#}").contains("broken.xml"), "err was: {err:#}");
}

#[test]
fn unknown_element_is_rejected() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("config.xml");
    fs::write(&cfg_path, "<config><download_base>/x</download_base></config>").unwrap();

    assert!(load_config_from_xml_path(&cfg_path).is_err());
}
