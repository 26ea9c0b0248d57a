//! Plugin discovery configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Controls which compiled-in plugins the host considers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Module-path prefixes to scan, e.g. `"moped_sample_plugins::editing"`.
    ///
    /// An empty list scans every registered plugin.
    pub scan: Vec<String>,
}

impl PluginConfig {
    /// Returns `true` when no scan restriction is configured.
    pub fn scans_all(&self) -> bool {
        self.scan.is_empty()
    }

    /// Check that every configured prefix is shaped like a module path.
    pub fn validate(&self) -> Result<(), AppError> {
        validate_scan_prefixes(&self.scan)
    }
}

/// Reject the first prefix that is not a `::`-separated path of Rust
/// identifiers. Crate names use `_`, not `-`.
pub fn validate_scan_prefixes<S: AsRef<str>>(prefixes: &[S]) -> Result<(), AppError> {
    for prefix in prefixes {
        let prefix = prefix.as_ref();
        if !is_module_path(prefix) {
            return Err(AppError::validation(format!(
                "Scan prefix '{prefix}' is not a module path"
            )));
        }
    }
    Ok(())
}

fn is_module_path(prefix: &str) -> bool {
    !prefix.is_empty()
        && prefix.split("::").all(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(c) if c == '_' || c.is_ascii_alphabetic() => {
                    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
                }
                _ => false,
            }
        })
}
