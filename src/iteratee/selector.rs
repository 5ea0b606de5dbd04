use serde_json::Value;

use super::Key;
use crate::path::{child, walk, PathCache, PropertyPath, Segment};

/// A prepared property accessor. Single names skip the path machinery entirely.
#[derive(Debug, Clone)]
enum Accessor {
    Property(Segment),
    Deep(PropertyPath),
}

impl Accessor {
    fn new(path: &str, cache: &PathCache) -> Accessor {
        if path.contains('.') {
            Accessor::Deep(cache.parse(path))
        } else {
            Accessor::Property(Segment::new(path))
        }
    }

    fn resolve<'v>(&self, item: &'v Value) -> Option<&'v Value> {
        match self {
            Accessor::Property(segment) => child(item, segment),
            Accessor::Deep(segments) => walk(item, segments),
        }
    }
}

/// Builds a key selector reading `path` off each item.
///
/// Missing properties (including anything below a `null` or a primitive) produce
/// [`Key::Undefined`], so they group together rather than being skipped.
pub fn property(path: &str) -> impl Fn(&Value, usize) -> Key + Clone + Send + Sync + use<> {
    property_with(path, PathCache::global())
}

/// Like [`property`], but dotted paths are parsed through `cache`.
pub fn property_with(
    path: &str,
    cache: &PathCache,
) -> impl Fn(&Value, usize) -> Key + Clone + Send + Sync + use<> {
    let accessor = Accessor::new(path, cache);
    move |item: &Value, _index: usize| Key::from(accessor.resolve(item))
}

/// A key specifier whose kind is decided at runtime: either a callback or a property path.
///
/// Code that knows its specifier statically should pass the closure or [`property`] directly
/// instead; this enum exists for the cases where the choice is data.
#[derive(Debug, Clone)]
pub enum Iteratee<F = fn(&Value, usize) -> Key> {
    Func(F),
    Path(String),
}

impl Iteratee {
    pub fn path(path: impl Into<String>) -> Iteratee {
        Iteratee::Path(path.into())
    }
}

impl From<&str> for Iteratee {
    fn from(value: &str) -> Self {
        Iteratee::Path(value.to_owned())
    }
}

impl From<String> for Iteratee {
    fn from(value: String) -> Self {
        Iteratee::Path(value)
    }
}

/// Normalises an [`Iteratee`] into a single `(item, index) -> key` callback.
pub fn to_selector<F>(iteratee: Iteratee<F>) -> impl Fn(&Value, usize) -> Key + use<F>
where
    F: Fn(&Value, usize) -> Key,
{
    to_selector_with(iteratee, PathCache::global())
}

pub fn to_selector_with<F>(
    iteratee: Iteratee<F>,
    cache: &PathCache,
) -> impl Fn(&Value, usize) -> Key + use<F>
where
    F: Fn(&Value, usize) -> Key,
{
    let selector = match iteratee {
        Iteratee::Func(f) => Selector::Func(f),
        Iteratee::Path(path) => Selector::Path(Accessor::new(&path, cache)),
    };

    move |item: &Value, index: usize| match &selector {
        Selector::Func(f) => f(item, index),
        Selector::Path(accessor) => Key::from(accessor.resolve(item)),
    }
}

enum Selector<F> {
    Func(F),
    Path(Accessor),
}
