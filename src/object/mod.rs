//! A module containing keyed collection builders and structural transforms over plain objects.
//!
//! Results whose keys come from data ([`group_by_record`], [`index_by`], [`count_by`]) are
//! [`Record`]s rather than bare objects. A `Record` has no members except the entries put into it,
//! so keys such as `"__proto__"` or `"toString"` are ordinary data.
//!
//! The transforms ([`pick`], [`omit`], [`map_keys`], [`evolve`] etc.) operate on [`Object`], which
//! keeps its keys in insertion order. Every transform preserves the source's key order for the
//! keys it retains.

mod error;
mod evolve;
mod keyed;
mod map;
mod pick;
mod record;

pub use error::*;
pub use evolve::*;
pub use keyed::*;
pub use map::*;
pub use pick::*;
pub use record::*;

/// A plain, insertion-ordered JSON object.
pub type Object = serde_json::Map<String, serde_json::Value>;
