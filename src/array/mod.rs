//! A module containing loop-based array primitives: intersection, deduplication and predicate
//! splitting.
//!
//! All functions borrow their input slices and return new vectors of cloned items; nothing here
//! mutates what it is given. Predicates and key selectors receive the item's index alongside the
//! item, matching the `(item, index)` convention used throughout the crate.

mod intersection;
mod partition;
mod tests;
mod unique;

pub use intersection::*;
pub use partition::*;
pub use unique::*;
