//! # moped-plugin-macros
//!
//! Procedural macros for Moped service plugins. Use them through the
//! `moped-plugin` crate, which re-exports [`macro@plugin`] next to the
//! runtime pieces the expansion refers to.

use proc_macro::TokenStream;

mod plugin;

/// Marks a type declaration as a Moped service plugin.
///
/// Accepted on `struct`, `enum` and `union` declarations without generic
/// parameters. Takes no arguments. The item is emitted unchanged; the macro
/// adds a `ServicePlugin` impl and registers a `PluginDescriptor` so hosts
/// can find the type at run time.
///
/// ```rust,ignore
/// use moped_plugin::plugin;
///
/// #[plugin]
/// pub struct SpellCheckService;
/// ```
#[proc_macro_attribute]
pub fn plugin(attr: TokenStream, item: TokenStream) -> TokenStream {
    plugin::expand_plugin(attr.into(), item.into()).into()
}
