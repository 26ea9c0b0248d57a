//! Integration tests for marking types and discovering them from a host.

use moped_plugin::prelude::*;
use moped_sample_plugins::editing::{BarUtil, FooService, WordWrapService};
use moped_sample_plugins::language::{IndentMode, RustGrammar, TokenCache};

mod host_local {
    use moped_plugin::plugin;

    #[plugin]
    #[derive(Debug, Default)]
    pub struct Formatter {
        pub runs: u32,
    }

    #[derive(Debug, Default)]
    pub struct Scratch;
}

#[test]
fn test_foo_service_is_plugin_bar_util_is_not() {
    let results = Discovery::global().classify(&candidates![FooService, BarUtil]);

    assert_eq!(
        results,
        vec![
            Classification {
                candidate: "moped_sample_plugins::editing::FooService".to_string(),
                is_plugin: true,
            },
            Classification {
                candidate: "moped_sample_plugins::editing::BarUtil".to_string(),
                is_plugin: false,
            },
        ]
    );
}

#[test]
fn test_plugins_across_crates() {
    assert!(is_plugin::<FooService>());
    assert!(is_plugin::<WordWrapService>());
    assert!(is_plugin::<RustGrammar>());
    assert!(is_plugin::<IndentMode>());
    assert!(is_plugin::<host_local::Formatter>());

    assert!(!is_plugin::<BarUtil>());
    assert!(!is_plugin::<TokenCache>());
    assert!(!is_plugin::<host_local::Scratch>());
    assert!(!is_plugin::<String>());
}

#[test]
fn test_static_and_runtime_answers_agree() {
    fn marked<T: ServicePlugin>() -> bool {
        is_plugin::<T>()
    }

    assert!(marked::<FooService>());
    assert!(marked::<IndentMode>());
    assert!(marked::<host_local::Formatter>());
}

#[test]
fn test_index_lists_every_marked_type_once() {
    let index = PluginIndex::global();
    let entries = index.entries();

    for name in [
        "moped_sample_plugins::editing::FooService",
        "moped_sample_plugins::editing::WordWrapService",
        "moped_sample_plugins::language::IndentMode",
        "moped_sample_plugins::language::RustGrammar",
    ] {
        let count = entries.iter().filter(|e| e.type_name == name).count();
        assert_eq!(count, 1, "{name}");
    }

    assert!(entries.iter().all(|e| e.name != "BarUtil" && e.name != "TokenCache"));
}

#[test]
fn test_scope_limits_discovery() {
    let editing = PluginIndex::global().scoped(&["moped_sample_plugins::editing"]);
    let discovery = Discovery::new(&editing);

    let found = discovery.plugins(&moped_sample_plugins::candidates());
    assert_eq!(
        found,
        vec![
            Candidate::of::<FooService>(),
            Candidate::of::<WordWrapService>(),
        ]
    );
}

#[test]
fn test_marking_does_not_change_behavior() {
    let mut service = FooService::new();
    service.record_edit();
    assert_eq!(service.edits(), 1);

    let wrap = WordWrapService::new(5);
    assert_eq!(wrap.wrap("ab cd ef"), vec!["ab cd", "ef"]);

    let formatter = host_local::Formatter::default();
    assert_eq!(formatter.runs, 0);
}

#[test]
fn test_lookup_by_name() {
    let index = PluginIndex::global();
    let found = index.find_by_name("Formatter");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].module_path(), "discovery::host_local");
    assert_eq!(found[0].type_id(), std::any::TypeId::of::<host_local::Formatter>());
}
