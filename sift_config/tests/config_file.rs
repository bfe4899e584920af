//! Integration tests for reading and writing the config file.

use sift_config::{Config, OutputFormat};

#[test]
fn template_loads_as_defaults() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("config.json");

    Config::create_at(&path).expect("template should be written");
    let config = Config::load_from(&path).expect("template should load");

    assert_eq!(config, Config::default());
}

#[test]
fn create_refuses_to_overwrite() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"output": {"format": "html"}}"#).expect("file should be written");

    let err = Config::create_at(&path).expect_err("existing file must not be overwritten");
    assert!(err.to_string().contains("already exists"));

    let config = Config::load_from(&path).expect("existing config should load");
    assert_eq!(config.output.format, OutputFormat::Html);
}

#[test]
fn invalid_config_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"output": {"format": "yaml"}}"#).expect("file should be written");

    let err = Config::load_from(&path).expect_err("unknown format should be rejected");
    assert!(err.to_string().contains("config.json"));
}
