//! Registry records emitted by `#[plugin]`.

use std::any::TypeId;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::marker::ServicePlugin;

/// Static description of one marked type.
///
/// Built in const context by the `#[plugin]` expansion and collected at link
/// time. `TypeId` and full type names are not const-evaluable yet, so both
/// are stored as function pointers and resolved on demand.
#[derive(Clone, Copy)]
pub struct PluginDescriptor {
    /// Identifier as written in the declaration.
    name: &'static str,
    /// `module_path!()` at the declaration site.
    module_path: &'static str,
    type_name: fn() -> &'static str,
    type_id: fn() -> TypeId,
}

inventory::collect!(PluginDescriptor);

impl PluginDescriptor {
    /// Creates the descriptor for a marked type.
    pub const fn of<T: ServicePlugin>(name: &'static str, module_path: &'static str) -> Self {
        Self {
            name,
            module_path,
            type_name: std::any::type_name::<T>,
            type_id: TypeId::of::<T>,
        }
    }

    /// Declared identifier, e.g. `FooService`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Module the type was declared in, e.g. `moped_sample_plugins::editing`.
    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// Fully-qualified type name, e.g. `moped_sample_plugins::editing::FooService`.
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Identity of the marked type.
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Whether this descriptor matches `name`, given either as the declared
    /// identifier or as the fully-qualified type name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name || self.type_name() == name
    }

    /// Whether the declaring module is `prefix` or nested below it.
    pub fn is_within(&self, prefix: &str) -> bool {
        match self.module_path.strip_prefix(prefix) {
            Some("") => true,
            Some(rest) => rest.starts_with("::"),
            None => false,
        }
    }

    /// Owned, serializable view of this descriptor.
    pub fn entry(&self) -> PluginEntry {
        PluginEntry {
            name: self.name.to_string(),
            type_name: self.type_name().to_string(),
            module_path: self.module_path.to_string(),
        }
    }
}

impl fmt::Debug for PluginDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginDescriptor")
            .field("name", &self.name)
            .field("module_path", &self.module_path)
            .field("type_name", &self.type_name())
            .finish()
    }
}

/// Listing row for a registered plugin.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PluginEntry {
    /// Declared identifier.
    pub name: String,
    /// Fully-qualified type name.
    pub type_name: String,
    /// Declaring module.
    pub module_path: String,
}
