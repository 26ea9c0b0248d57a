//! Convenience macros for plugin hosts.

/// Builds a `Vec<Candidate>` from a list of types.
///
/// # Example
/// ```rust
/// use moped_plugin::{candidates, plugin, Discovery};
///
/// #[plugin]
/// struct FooService;
/// struct BarUtil;
///
/// let results = Discovery::global().classify(&candidates![FooService, BarUtil]);
/// assert!(results[0].is_plugin);
/// assert!(!results[1].is_plugin);
/// ```
#[macro_export]
macro_rules! candidates {
    () => {
        ::std::vec::Vec::<$crate::Candidate>::new()
    };
    ($($ty:ty),+ $(,)?) => {
        ::std::vec![$($crate::Candidate::of::<$ty>()),+]
    };
}
