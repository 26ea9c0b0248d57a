//! `check` command: whether named types carry the plugin marker.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use moped_core::config::AppConfig;
use moped_core::error::AppError;
use moped_plugin::{Classification, Discovery, PluginIndex};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Type names, either declared (`FooService`) or fully qualified
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Fail if any name is not a plugin
    #[arg(long)]
    pub strict: bool,

    /// Module-path prefix to scan (repeatable, replaces `plugins.scan`)
    #[arg(short, long)]
    pub scan: Vec<String>,
}

/// Classification display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct ClassificationRow {
    /// Candidate as queried
    pub(crate) candidate: String,
    /// Whether it is a plugin
    pub(crate) plugin: bool,
}

impl From<Classification> for ClassificationRow {
    fn from(c: Classification) -> Self {
        Self {
            candidate: c.candidate,
            plugin: c.is_plugin,
        }
    }
}

/// Classify `names` against `index`; with `strict`, any non-plugin is an error.
pub fn classify(
    index: &PluginIndex,
    names: &[String],
    strict: bool,
) -> Result<Vec<Classification>, AppError> {
    let results = Discovery::new(index).classify_names(names);

    if strict {
        let missing: Vec<&str> = results
            .iter()
            .filter(|c| !c.is_plugin)
            .map(|c| c.candidate.as_str())
            .collect();
        if !missing.is_empty() {
            return Err(AppError::not_found(format!(
                "Not a registered plugin: {}",
                missing.join(", ")
            )));
        }
    }

    Ok(results)
}

/// Execute the check command
pub fn execute(args: &CheckArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let index = super::scoped_index(config, &args.scan)?;
    let rows: Vec<ClassificationRow> = classify(&index, &args.names, args.strict)?
        .into_iter()
        .map(ClassificationRow::from)
        .collect();

    output::print_list(&rows, format);
    Ok(())
}
