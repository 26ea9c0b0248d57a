use moped_plugin::{ServicePlugin, is_plugin, plugin};

#[plugin]
pub struct FooService {
    pub name: String,
}

#[plugin]
pub enum IndentMode {
    Tabs,
    Spaces(u8),
}

#[plugin]
#[derive(Clone, Copy)]
pub union Slot {
    pub int: u32,
    pub float: f32,
}

pub struct BarUtil;

fn assert_service_plugin<T: ServicePlugin>(_: &T) {}

fn main() {
    let service = FooService { name: String::from("foo") };
    let mode = IndentMode::Spaces(4);
    let slot = Slot { int: 7 };

    assert_service_plugin(&service);
    assert_service_plugin(&mode);
    assert_service_plugin(&slot);

    assert!(is_plugin::<FooService>());
    assert!(is_plugin::<IndentMode>());
    assert!(is_plugin::<Slot>());
    assert!(!is_plugin::<BarUtil>());

    assert_eq!(service.name, "foo");
    assert!(matches!(mode, IndentMode::Spaces(4)));
    assert!(!matches!(IndentMode::Tabs, IndentMode::Spaces(_)));
}
