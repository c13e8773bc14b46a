//! Config environment variable tests
//!
//! Every key has a default, so configuration must succeed with an empty
//! environment. Tests use #[serial] to prevent race conditions with
//! shared env vars.

use std::env;

use serial_test::serial;

use sentilog::config::{Config, LogFormat};

fn clear_env() {
    env::remove_var("DATASET_PATH");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_config_defaults() {
    clear_env();

    let config = Config::from_env();
    assert_eq!(
        config.dataset.path.to_str().unwrap(),
        "sentiment_dataset.csv"
    );
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_config_custom_dataset_path() {
    clear_env();
    env::set_var("DATASET_PATH", "/tmp/custom.csv");

    let config = Config::from_env();
    assert_eq!(config.dataset.path.to_str().unwrap(), "/tmp/custom.csv");

    env::remove_var("DATASET_PATH");
}

#[test]
#[serial]
fn test_config_json_log_format() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");

    let config = Config::from_env();
    assert_eq!(config.logging.format, LogFormat::Json);

    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_config_unknown_log_format_falls_back_to_pretty() {
    clear_env();
    env::set_var("LOG_FORMAT", "xml");

    let config = Config::from_env();
    assert_eq!(config.logging.format, LogFormat::Pretty);

    env::remove_var("LOG_FORMAT");
}

#[test]
#[serial]
fn test_config_custom_log_level() {
    clear_env();
    env::set_var("LOG_LEVEL", "debug");

    let config = Config::from_env();
    assert_eq!(config.logging.level, "debug");

    env::remove_var("LOG_LEVEL");
}
