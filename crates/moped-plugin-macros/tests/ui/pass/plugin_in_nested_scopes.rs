use moped_plugin::{PluginIndex, is_plugin, plugin};

mod services {
    use moped_plugin::plugin;

    #[plugin]
    pub(crate) struct Private;

    pub mod deeper {
        #[moped_plugin::plugin]
        pub struct r#Match;
    }
}

#[plugin]
struct Outer;

fn main() {
    #[plugin]
    struct Local;

    assert!(is_plugin::<services::Private>());
    assert!(is_plugin::<services::deeper::r#Match>());
    assert!(is_plugin::<Outer>());
    assert!(is_plugin::<Local>());

    let index = PluginIndex::global();
    let found = index.find_by_name("Match");
    assert_eq!(found.len(), 1);
    assert!(found[0].module_path().ends_with("services::deeper"));
}
