//! CLI command definitions and dispatch.

pub mod check;
pub mod config;
pub mod discover;
pub mod list;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use moped_core::config::{AppConfig, validate_scan_prefixes};
use moped_core::error::AppError;
use moped_core::result::AppResult;
use moped_plugin::PluginIndex;

/// Moped: lists and queries compiled-in service plugins
#[derive(Debug, Parser)]
#[command(name = "moped-plugins", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Environment overlay loaded from `<config dir>/<env>.toml`
    #[arg(short, long)]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List registered plugins
    List(list::ListArgs),
    /// Check whether named types are plugins
    Check(check::CheckArgs),
    /// Classify every candidate type exported by the linked plugin crates
    Discover(discover::DiscoverArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::List(args) => list::execute(args, config, self.format),
            Commands::Check(args) => check::execute(args, config, self.format),
            Commands::Discover(args) => discover::execute(args, config, self.format),
            Commands::Config(args) => {
                config::execute(args, config, &self.config, self.format).await
            }
        }
    }

    /// Whether the loaded configuration must be valid before dispatch.
    ///
    /// `config` subcommands inspect or replace the configuration and run
    /// against whatever was loaded.
    pub fn requires_valid_config(&self) -> bool {
        !matches!(self.command, Commands::Config(_))
    }
}

/// Helper: the global plugin index restricted to the scan prefixes.
///
/// Prefixes given on the command line replace the configured ones and must
/// be module paths.
pub fn scoped_index(config: &AppConfig, overrides: &[String]) -> AppResult<PluginIndex> {
    let prefixes: &[String] = if overrides.is_empty() {
        &config.plugins.scan
    } else {
        validate_scan_prefixes(overrides)?;
        overrides
    };
    Ok(PluginIndex::global().scoped(prefixes))
}
