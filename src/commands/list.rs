//! `list` command: registered plugins.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use moped_core::config::AppConfig;
use moped_core::error::AppError;
use moped_plugin::PluginIndex;

/// Arguments for the list command
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Module-path prefix to scan (repeatable, replaces `plugins.scan`)
    #[arg(short, long)]
    pub scan: Vec<String>,
}

/// Plugin display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct PluginRow {
    /// Declared name
    name: String,
    /// Declaring module
    module: String,
    /// Full type name
    #[tabled(rename = "type")]
    #[serde(rename = "type")]
    type_name: String,
}

/// Build listing rows for an index
pub fn rows(index: &PluginIndex) -> Vec<PluginRow> {
    index
        .entries()
        .into_iter()
        .map(|e| PluginRow {
            name: e.name,
            module: e.module_path,
            type_name: e.type_name,
        })
        .collect()
}

/// Execute the list command
pub fn execute(args: &ListArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let index = super::scoped_index(config, &args.scan)?;
    tracing::debug!(plugins = index.len(), "Listing plugins");

    output::print_list(&rows(&index), format);
    Ok(())
}
