//! # moped-plugin
//!
//! Service-plugin marking for the Moped editor. Provides:
//!
//! - The [`ServicePlugin`] marker trait and the [`macro@plugin`] attribute
//!   that implements it on type declarations
//! - A link-time registry of [`PluginDescriptor`]s, one per marked type
//! - [`PluginIndex`] for run-time presence queries by type or by name
//! - [`Discovery`] for classifying a host's candidate types
//!
//! The marker carries no payload and performs no validation of the marked
//! type's shape. What interface a plugin implements is up to the service
//! it extends.

// Lets `#[plugin]` expansions resolve `::moped_plugin` inside this crate.
extern crate self as moped_plugin;

pub mod descriptor;
pub mod discovery;
pub mod macros;
pub mod marker;
pub mod prelude;
pub mod registry;

pub use descriptor::{PluginDescriptor, PluginEntry};
pub use discovery::{Candidate, Classification, Discovery};
pub use marker::{ServicePlugin, assert_plugin, is_plugin, is_plugin_type};
pub use moped_plugin_macros::plugin;
pub use registry::PluginIndex;

#[doc(hidden)]
pub mod __private {
    pub use inventory;

    pub use crate::marker::Registered;
}
