//! Prelude for convenient imports.

pub use crate::descriptor::{PluginDescriptor, PluginEntry};
pub use crate::discovery::{Candidate, Classification, Discovery};
pub use crate::marker::{ServicePlugin, assert_plugin, is_plugin, is_plugin_type};
pub use crate::plugin;
pub use crate::registry::PluginIndex;

pub use crate::candidates;
