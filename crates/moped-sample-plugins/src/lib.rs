//! Sample services for the Moped plugin host.
//!
//! Some types here are marked with `#[plugin]` and some are plain helpers,
//! so a host linking this crate has both plugin and non-plugin candidates
//! to classify.

pub mod editing;
pub mod language;

use moped_plugin::{Candidate, candidates};

/// Every public type in this crate, marked or not, in declaration order.
pub fn candidates() -> Vec<Candidate> {
    candidates![
        editing::FooService,
        editing::BarUtil,
        editing::WordWrapService,
        language::RustGrammar,
        language::IndentMode,
        language::TokenCache,
    ]
}
