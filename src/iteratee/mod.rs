//! A module containing key selectors ("iteratees") and the [`Key`] type they produce.
//!
//! Every keyed algorithm in this crate takes a plain `Fn(&T, usize) -> K`, so a closure is always
//! passed straight through with no adaptation. For dynamic items, [`property`] turns a path string
//! into such a closure once per call site: a name without dots reads that property directly, a
//! dotted path is parsed through the [`PathCache`](crate::path::PathCache) and walked with the
//! same null-safety as [`get_path`](crate::path::get_path).
//!
//! [`Iteratee`] covers the case where the kind of specifier is only known at runtime.

mod key;
mod selector;

pub use key::*;
pub use selector::*;
