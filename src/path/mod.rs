//! A module containing dot-separated property paths and the operations that walk them.
//!
//! A path string such as `"user.profile.email"` is split into [`Segment`]s once and memoised in a
//! bounded [`PathCache`]. The process-wide cache is available through [`PathCache::global`], but
//! every operation also has a `_with` variant taking an explicit cache so tests (and callers with
//! their own lifetime requirements) don't have to share state.
//!
//! [`get_path`] and [`set_path`] operate on [`serde_json::Value`] trees. Reads are null-safe: any
//! missing, `null` or primitive intermediate value short-circuits to [`None`]. Writes consume the
//! root and rebuild only the containers on the path, moving everything else across untouched.

mod access;
mod cache;
mod error;
mod segment;

pub use access::*;
pub use cache::*;
pub use error::*;
pub use segment::*;
