//! Configuration file tests

use fittrack::config::loader::{default_config_content, load_config_from_path};
use fittrack::config::{save_config, Config};
use fittrack::Error;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fittrack.toml");

    let mut config = Config::default();
    config.server.port = 8080;
    config.gym.name = "Iron Temple".to_string();
    save_config(&config, &path).unwrap();

    let loaded = load_config_from_path(&path).unwrap();
    assert_eq!(loaded.server.port, 8080);
    assert_eq!(loaded.gym.name, "Iron Temple");
    assert_eq!(loaded.gym.plans, config.gym.plans);
}

#[test]
fn test_partial_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fittrack.toml");
    fs::write(&path, "[session]\nidle_timeout_minutes = 5\n").unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.session.idle_timeout_minutes, 5);
    assert_eq!(config.session.cookie_name, "fittrack_sid");
    assert_eq!(config.plan_price("Pro"), 59);
}

#[test]
fn test_generated_file_loads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fittrack.toml");
    fs::write(&path, default_config_content()).unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.gym.default_plan, "Basic");
    assert_eq!(config.gym.plans.len(), 3);
    assert!(config.get_plan(&config.gym.default_plan).is_some());
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = load_config_from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(Error::ConfigNotFound)));
}

#[test]
fn test_invalid_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fittrack.toml");
    fs::write(&path, "[server\nport = ").unwrap();

    assert!(matches!(load_config_from_path(&path), Err(Error::TomlParse(_))));
}
