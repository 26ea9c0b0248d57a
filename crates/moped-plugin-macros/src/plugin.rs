//! Expansion of the `#[plugin]` attribute.
//!
//! The attribute accepts exactly the declarations that introduce a concrete
//! nominal type: non-generic `struct`, `enum` and `union` items. Everything
//! else is rejected here with a spanned diagnostic, so misuse never reaches
//! run time.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Generics, Ident, Item};

const NOT_A_TYPE: &str =
    "`#[plugin]` may only be applied to type declarations (struct, enum, union)";
const HAS_ARGUMENTS: &str = "`#[plugin]` takes no arguments";
const IS_GENERIC: &str =
    "`#[plugin]` requires a concrete type; generic parameters are not supported";

/// Expands `#[plugin]`.
///
/// On error the original item is still emitted next to the diagnostic so
/// the rest of the crate keeps resolving and only one error is reported.
pub fn expand_plugin(attr: TokenStream, item: TokenStream) -> TokenStream {
    match try_expand(attr, item.clone()) {
        Ok(tokens) => tokens,
        Err(err) => {
            let err = err.to_compile_error();
            quote! {
                #err
                #item
            }
        }
    }
}

fn try_expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    if !attr.is_empty() {
        return Err(syn::Error::new_spanned(attr, HAS_ARGUMENTS));
    }

    let item: Item = syn::parse2(item)?;
    let (ident, generics) = type_declaration(&item)?;

    if !generics.params.is_empty() {
        return Err(syn::Error::new_spanned(generics, IS_GENERIC));
    }

    let name = ident.unraw().to_string();

    Ok(quote! {
        #item

        impl ::moped_plugin::__private::Registered for #ident {}

        impl ::moped_plugin::ServicePlugin for #ident {}

        ::moped_plugin::__private::inventory::submit! {
            ::moped_plugin::PluginDescriptor::of::<#ident>(#name, ::core::module_path!())
        }
    })
}

/// Returns the declared identifier and generics of a type declaration.
fn type_declaration(item: &Item) -> syn::Result<(&Ident, &Generics)> {
    match item {
        Item::Struct(s) => Ok((&s.ident, &s.generics)),
        Item::Enum(e) => Ok((&e.ident, &e.generics)),
        Item::Union(u) => Ok((&u.ident, &u.generics)),
        other => Err(syn::Error::new_spanned(other, NOT_A_TYPE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(attr: &str, item: &str) -> String {
        let attr: TokenStream = attr.parse().expect("attr tokens");
        let item: TokenStream = item.parse().expect("item tokens");
        expand_plugin(attr, item).to_string()
    }

    #[test]
    fn test_struct_is_registered() {
        let out = expand_str("", "pub struct FooService { count: u32 }");
        assert!(out.contains("pub struct FooService"));
        assert!(out.contains("ServicePlugin for FooService"));
        assert!(out.contains("Registered for FooService"));
        assert!(out.contains("inventory :: submit !"));
        assert!(out.contains("\"FooService\""));
        assert!(!out.contains("compile_error"));
    }

    #[test]
    fn test_enum_and_union_are_accepted() {
        let out = expand_str("", "enum IndentMode { Tabs, Spaces(u8) }");
        assert!(out.contains("ServicePlugin for IndentMode"));

        let out = expand_str("", "union Slot { a: u32, b: f32 }");
        assert!(out.contains("ServicePlugin for Slot"));
    }

    #[test]
    fn test_raw_identifier_registers_plain_name() {
        let out = expand_str("", "struct r#Match;");
        assert!(out.contains("\"Match\""));
    }

    #[test]
    fn test_function_is_rejected() {
        let out = expand_str("", "fn helper() {}");
        assert!(out.contains("compile_error"));
        assert!(out.contains("may only be applied to type declarations"));
        assert!(out.contains("fn helper"));
        assert!(!out.contains("ServicePlugin"));
    }

    #[test]
    fn test_other_items_are_rejected() {
        for item in [
            "impl Foo {}",
            "trait Service {}",
            "type Alias = u32;",
            "const LIMIT: u32 = 4;",
            "mod nested {}",
        ] {
            let out = expand_str("", item);
            assert!(out.contains("may only be applied"), "accepted: {item}");
        }
    }

    #[test]
    fn test_arguments_are_rejected() {
        let out = expand_str("name = \"foo\"", "struct FooService;");
        assert!(out.contains("takes no arguments"));
        assert!(!out.contains("ServicePlugin"));
    }

    #[test]
    fn test_generics_are_rejected() {
        for item in [
            "struct Wrapper<T>(T);",
            "struct Borrowed<'a>(&'a str);",
            "enum Width<const N: usize> { Fixed }",
        ] {
            let out = expand_str("", item);
            assert!(out.contains("requires a concrete type"), "accepted: {item}");
        }
    }
}
