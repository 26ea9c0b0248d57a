//! The service-plugin marker.

use std::any::TypeId;

use crate::registry::PluginIndex;

/// Marks a type as a service-plugin implementation.
///
/// The trait has no items: it is a pure presence tag. Implement it with the
/// [`macro@crate::plugin`] attribute, which also records the type in the
/// run-time registry so [`is_plugin`] agrees with the trait bound.
///
/// ```
/// use moped_plugin::{assert_plugin, is_plugin, plugin};
///
/// #[plugin]
/// struct FooService;
///
/// struct BarUtil;
///
/// assert_plugin::<FooService>();
/// assert!(is_plugin::<FooService>());
/// assert!(!is_plugin::<BarUtil>());
/// ```
///
/// Only type declarations can be marked:
///
/// ```compile_fail
/// use moped_plugin::plugin;
///
/// #[plugin]
/// fn helper() {}
/// ```
///
/// ```compile_fail
/// use moped_plugin::plugin;
///
/// #[plugin]
/// trait Service {}
/// ```
///
/// The marker takes no arguments:
///
/// ```compile_fail
/// use moped_plugin::plugin;
///
/// #[plugin(name = "foo")]
/// struct FooService;
/// ```
///
/// Marked types must be concrete:
///
/// ```compile_fail
/// use moped_plugin::plugin;
///
/// #[plugin]
/// struct Wrapper<T>(T);
/// ```
///
/// Marking twice conflicts:
///
/// ```compile_fail
/// use moped_plugin::plugin;
///
/// #[plugin]
/// #[plugin]
/// struct FooService;
/// ```
///
/// Unmarked types do not satisfy the bound:
///
/// ```compile_fail
/// struct BarUtil;
///
/// moped_plugin::assert_plugin::<BarUtil>();
/// ```
pub trait ServicePlugin: Registered + 'static {}

/// Implemented by `#[plugin]` next to [`ServicePlugin`]. Not part of the
/// public contract.
#[doc(hidden)]
pub trait Registered {}

/// Compile-time check that `T` carries the marker.
pub const fn assert_plugin<T: ServicePlugin>() {}

/// Returns `true` if `T` was marked with `#[plugin]`.
///
/// Answers from the process-wide [`PluginIndex`]; unmarked and unknown types
/// return `false`.
pub fn is_plugin<T: ?Sized + 'static>() -> bool {
    is_plugin_type(TypeId::of::<T>())
}

/// Returns `true` if the type with this `TypeId` was marked with `#[plugin]`.
pub fn is_plugin_type(type_id: TypeId) -> bool {
    PluginIndex::global().contains(type_id)
}
