//! Plugin index: run-time view over every descriptor submitted by
//! `#[plugin]`.
//!
//! The registry itself is assembled by the linker. [`PluginIndex::global`]
//! reads it once per process and keeps the result for the lifetime of the
//! program; after that every query is a read of immutable data.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, info, warn};

use crate::descriptor::{PluginDescriptor, PluginEntry};

static GLOBAL: OnceLock<PluginIndex> = OnceLock::new();

/// Index of marked types keyed by `TypeId`.
#[derive(Debug, Clone, Default)]
pub struct PluginIndex {
    /// Type identity → descriptor.
    by_type: HashMap<TypeId, PluginDescriptor>,
}

impl PluginIndex {
    /// Returns the process-wide index built from every linked descriptor.
    pub fn global() -> &'static PluginIndex {
        GLOBAL.get_or_init(Self::collect)
    }

    /// Builds a fresh index from the link-time registry.
    pub fn collect() -> Self {
        let index = Self::from_descriptors(inventory::iter::<PluginDescriptor>.into_iter().copied());
        info!(plugins = index.len(), "Plugin index built");
        index
    }

    /// Builds an index from an explicit descriptor set.
    ///
    /// A descriptor whose type is already indexed is ignored.
    pub fn from_descriptors<I>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = PluginDescriptor>,
    {
        let mut by_type = HashMap::new();

        for descriptor in descriptors {
            let type_id = descriptor.type_id();
            if by_type.contains_key(&type_id) {
                warn!(
                    plugin = %descriptor.type_name(),
                    "Duplicate plugin descriptor ignored"
                );
                continue;
            }

            debug!(
                plugin = %descriptor.type_name(),
                module = %descriptor.module_path(),
                "Indexed plugin"
            );
            by_type.insert(type_id, descriptor);
        }

        Self { by_type }
    }

    /// Returns a new index holding only the descriptors declared in one of
    /// `prefixes` (or below). An empty prefix list keeps everything.
    pub fn scoped<S: AsRef<str>>(&self, prefixes: &[S]) -> Self {
        if prefixes.is_empty() {
            return self.clone();
        }

        let by_type: HashMap<TypeId, PluginDescriptor> = self
            .by_type
            .iter()
            .filter(|(_, d)| prefixes.iter().any(|p| d.is_within(p.as_ref())))
            .map(|(id, d)| (*id, *d))
            .collect();

        debug!(
            kept = by_type.len(),
            total = self.by_type.len(),
            "Plugin index scoped"
        );

        Self { by_type }
    }

    /// Number of indexed plugins.
    pub fn len(&self) -> usize {
        self.by_type.len()
    }

    /// Whether no plugins are indexed.
    pub fn is_empty(&self) -> bool {
        self.by_type.is_empty()
    }

    /// Whether the type with this `TypeId` is indexed.
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.by_type.contains_key(&type_id)
    }

    /// Whether `T` is indexed.
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.contains(TypeId::of::<T>())
    }

    /// Descriptor for the type with this `TypeId`.
    pub fn get(&self, type_id: TypeId) -> Option<&PluginDescriptor> {
        self.by_type.get(&type_id)
    }

    /// Descriptors matching `name`, either the declared identifier or the
    /// full type name, sorted by full type name.
    ///
    /// A short name can match several plugins declared in different modules.
    pub fn find_by_name(&self, name: &str) -> Vec<&PluginDescriptor> {
        let mut found: Vec<&PluginDescriptor> = self
            .by_type
            .values()
            .filter(|d| d.matches_name(name))
            .collect();
        found.sort_by_key(|d| d.type_name());
        found
    }

    /// Whether any indexed plugin matches `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.by_type.values().any(|d| d.matches_name(name))
    }

    /// All descriptors, sorted by full type name.
    pub fn descriptors(&self) -> Vec<&PluginDescriptor> {
        let mut all: Vec<&PluginDescriptor> = self.by_type.values().collect();
        all.sort_by_key(|d| d.type_name());
        all
    }

    /// Listing rows for all indexed plugins, sorted by full type name.
    pub fn entries(&self) -> Vec<PluginEntry> {
        self.descriptors().into_iter().map(|d| d.entry()).collect()
    }

    /// Iterates descriptors in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.by_type.values()
    }
}
