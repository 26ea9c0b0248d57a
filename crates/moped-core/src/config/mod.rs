//! Application configuration schemas.
//!
//! Configuration is deserialized from TOML files via the `config` crate,
//! layered as: base file, optional environment overlay next to it, then
//! `MOPED__`-prefixed environment variables (e.g. `MOPED__LOGGING__LEVEL`).

pub mod logging;
pub mod plugin;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use self::logging::LoggingConfig;
pub use self::plugin::{PluginConfig, validate_scan_prefixes};

use crate::error::AppError;

const LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
const FORMATS: &[&str] = &["json", "pretty"];

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Plugin discovery settings.
    pub plugins: PluginConfig,
}

impl AppConfig {
    /// Load configuration from `path`, an optional `{env}.toml` overlay in the
    /// same directory, and `MOPED__*` environment variables.
    ///
    /// Missing files are not an error; every field has a default.
    pub fn load(path: impl AsRef<Path>, env: Option<&str>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let mut builder =
            config::Config::builder().add_source(config::File::from(path).required(false));

        if let Some(env) = env {
            let overlay = overlay_path(path, env);
            tracing::debug!(overlay = %overlay.display(), "Adding environment overlay");
            builder = builder.add_source(config::File::from(overlay).required(false));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("MOPED")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("plugins.scan")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Check values the type system cannot: log level, log format and the
    /// shape of scan prefixes.
    pub fn validate(&self) -> Result<(), AppError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(AppError::validation(format!(
                "Unknown log level '{}' (expected one of: {})",
                self.logging.level,
                LEVELS.join(", ")
            )));
        }

        let format = self.logging.format.to_ascii_lowercase();
        if !FORMATS.contains(&format.as_str()) {
            return Err(AppError::validation(format!(
                "Unknown log format '{}' (expected one of: {})",
                self.logging.format,
                FORMATS.join(", ")
            )));
        }

        self.plugins.validate()
    }
}

/// `config/default.toml` + `staging` → `config/staging.toml`
fn overlay_path(base: &Path, env: &str) -> PathBuf {
    let file = format!("{env}.toml");
    match base.parent() {
        Some(dir) => dir.join(file),
        None => PathBuf::from(file),
    }
}
