//! Classifies a host's candidate types as plugins or not.

use std::any::TypeId;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::registry::PluginIndex;

/// A type the host wants classified.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    type_id: TypeId,
    type_name: &'static str,
}

impl Candidate {
    /// Captures the identity of any `'static` type.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Identity of the candidate type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Fully-qualified name of the candidate type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Candidate").field(&self.type_name).finish()
    }
}

/// Outcome for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The candidate as given: a full type name, or the name that was queried.
    pub candidate: String,
    /// Whether the candidate carries the plugin marker.
    pub is_plugin: bool,
}

/// Classifies candidates against a [`PluginIndex`].
#[derive(Debug, Clone, Copy)]
pub struct Discovery<'a> {
    index: &'a PluginIndex,
}

impl Discovery<'static> {
    /// Discovery over the process-wide index.
    pub fn global() -> Self {
        Self::new(PluginIndex::global())
    }
}

impl<'a> Discovery<'a> {
    /// Creates a discovery pass over `index`.
    pub fn new(index: &'a PluginIndex) -> Self {
        Self { index }
    }

    /// Classifies each candidate, preserving input order.
    pub fn classify(&self, candidates: &[Candidate]) -> Vec<Classification> {
        let results: Vec<Classification> = candidates
            .iter()
            .map(|candidate| {
                let is_plugin = self.index.contains(candidate.type_id);
                debug!(candidate = %candidate.type_name, is_plugin, "Classified candidate");
                Classification {
                    candidate: candidate.type_name.to_string(),
                    is_plugin,
                }
            })
            .collect();

        info!(
            candidates = results.len(),
            plugins = results.iter().filter(|c| c.is_plugin).count(),
            "Discovery complete"
        );

        results
    }

    /// Classifies names, each given as a declared identifier or a full type
    /// name. Preserves input order.
    pub fn classify_names<S: AsRef<str>>(&self, names: &[S]) -> Vec<Classification> {
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                let is_plugin = self.index.contains_name(name);
                debug!(candidate = %name, is_plugin, "Classified name");
                Classification {
                    candidate: name.to_string(),
                    is_plugin,
                }
            })
            .collect()
    }

    /// Returns only the candidates that carry the marker.
    pub fn plugins(&self, candidates: &[Candidate]) -> Vec<Candidate> {
        candidates
            .iter()
            .filter(|c| self.index.contains(c.type_id))
            .copied()
            .collect()
    }
}
