//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use moped_core::config::AppConfig;
use moped_core::error::AppError;
use moped_core::result::AppResult;

/// Bundled default configuration
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Validate configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => {
            validate(config, config_path)?;
            output::print_success(&format!("Configuration '{}' is valid", config_path));
            output::print_kv("Log level", &config.logging.level);
            output::print_kv("Log format", &config.logging.format);
            output::print_kv("Scan", &describe_scan(config));
        }
        ConfigCommand::Generate { output: out_path } => {
            generate(out_path).await?;
            output::print_success(&format!("Default config written to '{}'", out_path));
        }
    }

    Ok(())
}

/// Validate `config`, naming `config_path` in the error. Reporting is left
/// to the caller.
fn validate(config: &AppConfig, config_path: &str) -> AppResult<()> {
    config.validate().map_err(|e| {
        AppError::validation(format!("Configuration '{}' is invalid: {}", config_path, e.message))
    })
}

/// Write the bundled default configuration to `out_path`, creating parent
/// directories as needed.
pub async fn generate(out_path: &str) -> AppResult<()> {
    if let Some(parent) = std::path::Path::new(out_path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    tokio::fs::write(out_path, DEFAULT_CONFIG).await?;
    tracing::info!(path = %out_path, "Default configuration generated");
    Ok(())
}

fn describe_scan(config: &AppConfig) -> String {
    if config.plugins.scans_all() {
        "all plugins".to_string()
    } else {
        config.plugins.scan.join(", ")
    }
}
