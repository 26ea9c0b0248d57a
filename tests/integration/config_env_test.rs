//! `MOPED__*` environment variables layered over configuration files.
//!
//! Kept in its own test binary: the variables are process-wide and would
//! leak into other tests that load configuration.

mod helpers;

use moped_core::config::AppConfig;

#[test]
fn test_env_layer_overrides_file() {
    let dir = helpers::TestConfigDir::new();
    let path = dir.write(
        "default.toml",
        "[logging]\nlevel = \"info\"\nformat = \"json\"\n\n[plugins]\nscan = [\"moped_sample_plugins::language\"]\n",
    );

    temp_env::with_vars(
        [
            ("MOPED__LOGGING__LEVEL", Some("debug")),
            ("MOPED__PLUGINS__SCAN", Some("a::b,c")),
        ],
        || {
            let config = AppConfig::load(&path, None).expect("should load");
            assert_eq!(config.logging.level, "debug");
            assert!(config.logging.is_json());
            assert_eq!(config.plugins.scan, vec!["a::b", "c"]);
            assert!(config.validate().is_ok());
        },
    );
}

#[test]
fn test_env_layer_applies_without_file() {
    let dir = helpers::TestConfigDir::new();

    temp_env::with_vars(
        [
            ("MOPED__LOGGING__LEVEL", None),
            ("MOPED__PLUGINS__SCAN", Some("moped_sample_plugins::editing")),
        ],
        || {
            let config = AppConfig::load(dir.path("missing.toml"), None).expect("should load");
            assert_eq!(config.logging.level, "warn");
            assert_eq!(config.plugins.scan, vec!["moped_sample_plugins::editing"]);
        },
    );
}
