//! `discover` command: classify the candidate types exported by linked plugin crates.

use clap::Args;

use super::check::ClassificationRow;
use crate::output::{self, OutputFormat};
use moped_core::config::AppConfig;
use moped_core::error::AppError;
use moped_plugin::{Candidate, Discovery, PluginIndex};

/// Arguments for the discover command
#[derive(Debug, Args)]
pub struct DiscoverArgs {
    /// Show only candidates that are plugins
    #[arg(long)]
    pub plugins_only: bool,

    /// Module-path prefix to scan (repeatable, replaces `plugins.scan`)
    #[arg(short, long)]
    pub scan: Vec<String>,
}

/// Candidate types offered by every linked plugin crate.
pub fn candidates() -> Vec<Candidate> {
    moped_sample_plugins::candidates()
}

/// Build classification rows in candidate order, optionally keeping only
/// plugins.
pub fn rows(index: &PluginIndex, plugins_only: bool) -> Vec<ClassificationRow> {
    Discovery::new(index)
        .classify(&candidates())
        .into_iter()
        .filter(|c| c.is_plugin || !plugins_only)
        .map(ClassificationRow::from)
        .collect()
}

/// Execute the discover command
pub fn execute(
    args: &DiscoverArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let index = super::scoped_index(config, &args.scan)?;
    output::print_list(&rows(&index, args.plugins_only), format);
    Ok(())
}
