//! This crate is a set of collection primitives for the hot paths of data-shaping code: grouping,
//! indexing, intersecting, deduplicating and reshaping collections of items, plus null-safe access
//! to values by dotted property path.
//!
//! # Purpose
//! Utility libraries usually express these operations as chains of generic combinators, which is
//! convenient but allocates intermediate collections at every step. The functions here are written
//! as plain loops over borrowed slices with a deliberate choice of container for each job: a hash
//! set where only membership matters, an insertion-ordered map where the order of first sight is
//! part of the result, and a single pass wherever one is enough.
//!
//! # Method
//! Everything revolves around a key selector: any `Fn(&T, usize) -> K` that derives a key from an
//! item and its index. Closures are passed straight through. For dynamic
//! [`Value`](serde_json::Value) items, [`iteratee::property`] turns a path string such as
//! `"user.id"` into a selector once, with the parsed path memoised in a bounded
//! [`PathCache`](path::PathCache). Keys of dynamic values are [`Key`](iteratee::Key)s, which hash
//! and compare with same-value-zero semantics, so `NaN` meets `NaN` and `-0` meets `0`.
//!
//! Results whose keys come from data are [`Record`](object::Record)s, which have no members except
//! the entries put into them.
//!
//! # Error Handling
//! The algorithms don't fail: empty or mismatched inputs produce empty or partial results, never an
//! error and never a panic. The few fallible constructors return strongly typed errors, small
//! structs implementing [`Error`](std::error::Error) with nothing boxed or stringly typed.
//!
//! # Dependencies
//! Dynamic values are [`serde_json`] values, with `preserve_order` enabled so that objects
//! enumerate their keys in insertion order. Ordered maps come from `indexmap`. The shared path
//! cache is guarded by a `parking_lot` mutex and initialised lazily through `once_cell`. Diagnostics
//! go through `tracing` at `debug` and `trace` level. No subscriber is installed here.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "array")]
pub mod array;
#[cfg(feature = "path")]
pub mod iteratee;
#[cfg(feature = "object")]
pub mod object;
#[cfg(feature = "path")]
pub mod path;
