//! Integration tests for loading host configuration.

mod helpers;

use moped_core::config::AppConfig;
use moped_core::error::ErrorKind;
use moped_plugin::PluginIndex;

#[test]
fn test_absent_file_uses_defaults() {
    let dir = helpers::TestConfigDir::new();
    let config = AppConfig::load(dir.path("missing.toml"), None).expect("should load");
    assert_eq!(config, AppConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn test_scan_prefixes_drive_the_index() {
    let dir = helpers::TestConfigDir::new();
    let path = dir.write(
        "default.toml",
        "[plugins]\nscan = [\"moped_sample_plugins::language\"]\n",
    );

    let config = AppConfig::load(&path, None).expect("should load");
    let index = PluginIndex::global().scoped(&config.plugins.scan);

    assert!(index.contains_type::<moped_sample_plugins::language::RustGrammar>());
    assert!(!index.contains_type::<moped_sample_plugins::editing::FooService>());
}

#[test]
fn test_overlay_and_validation() {
    let dir = helpers::TestConfigDir::new();
    let base = dir.write("default.toml", "[logging]\nlevel = \"info\"\n");
    dir.write("broken.toml", "[logging]\nformat = \"xml\"\n");

    let config = AppConfig::load(&base, Some("broken")).expect("should load");
    assert_eq!(config.logging.level, "info");

    let err = config.validate().expect_err("xml is not a log format");
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[test]
fn test_malformed_file_is_configuration_error() {
    let dir = helpers::TestConfigDir::new();
    let path = dir.write("default.toml", "[logging\nlevel = ");

    let err = AppConfig::load(&path, None).expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[test]
fn test_malformed_scan_prefix_fails_validation() {
    let dir = helpers::TestConfigDir::new();
    let path = dir.write("default.toml", "[plugins]\nscan = [\"moped-sample\"]\n");

    let config = AppConfig::load(&path, None).expect("should load");
    let err = config.validate().expect_err("dash is not a module path");
    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(err.message.contains("'moped-sample'"));
}
