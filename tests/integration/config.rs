//! Configuration loading

use minihm::util::config::EngineConfig;
use minihm::util::logger::LogLevel;
use minihm::Algorithm;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minihm.ron");
    fs::write(&path, "(algorithm: J, first_var: 3, log_level: warn)").unwrap();

    let config = EngineConfig::from_file(&path).unwrap();
    assert_eq!(config.algorithm, Algorithm::J);
    assert_eq!(config.first_var, 3);
    assert_eq!(config.log_level, LogLevel::Warn);

    // 无覆盖时与文件内容一致
    let unchanged = config.clone().with_overrides(|_| None).unwrap();
    assert_eq!(unchanged, config);
}

#[test]
fn test_file_then_overrides() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("minihm.ron");
    fs::write(&path, "(algorithm: J, log_level: warn)").unwrap();

    let config = EngineConfig::from_file(&path)
        .unwrap()
        .with_overrides(|key| (key == "MINIHM_LOG").then(|| "debug".to_string()))
        .unwrap();
    assert_eq!(config.algorithm, Algorithm::J);
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
fn test_load_reports_parse_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.ron");
    fs::write(&path, "(algorithm: ").unwrap();
    let err = EngineConfig::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("parsing config file"));
}
