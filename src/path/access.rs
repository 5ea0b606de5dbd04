use std::mem;

use serde_json::{Map, Value};

use super::{AsPath, PathCache, PropertyPath, Segment};

/// The most `null`s [`set_path`] will insert to reach an index past the end of an array. A write
/// further out turns the array into an object keyed by index instead.
pub const MAX_ARRAY_GAP: usize = 1024;

/// Parses `path` through the global cache.
pub fn parse_path(path: &str) -> PropertyPath {
    PathCache::global().parse(path)
}

/// Reads the value at `path` below `root`, or None if any step is missing, `null` or a primitive.
///
/// An explicit `null` at the end of the path is a present value and is returned as such.
pub fn get_path<'v, P: AsPath + ?Sized>(root: &'v Value, path: &P) -> Option<&'v Value> {
    get_path_with(PathCache::global(), root, path)
}

pub fn get_path_with<'v, P: AsPath + ?Sized>(
    cache: &PathCache,
    root: &'v Value,
    path: &P,
) -> Option<&'v Value> {
    walk(root, &path.segments_in(cache))
}

/// Like [`get_path`], but substitutes `default` wherever the path doesn't resolve.
pub fn get_path_or<'v, P: AsPath + ?Sized>(
    root: &'v Value,
    path: &P,
    default: &'v Value,
) -> &'v Value {
    get_path(root, path).unwrap_or(default)
}

/// Returns `root` with `value` stored at `path`.
///
/// Only the containers along the path are touched; everything beside them is moved into the
/// result as it was. Missing or primitive intermediates are replaced with a new container: an
/// array if the following segment is an index, otherwise an object. A non-index segment applied
/// to an existing array turns that array into an object keyed by element index, and an index past
/// the end of an array pads the gap with `null`. An index more than [`MAX_ARRAY_GAP`] past the end
/// is treated like a non-index segment.
///
/// An empty segment list returns `root` unchanged.
pub fn set_path<P: AsPath + ?Sized>(root: Value, path: &P, value: Value) -> Value {
    set_path_with(PathCache::global(), root, path, value)
}

pub fn set_path_with<P: AsPath + ?Sized>(
    cache: &PathCache,
    root: Value,
    path: &P,
    value: Value,
) -> Value {
    let segments = path.segments_in(cache);
    let Some((last, parents)) = segments.split_last() else {
        return root;
    };

    let mut root = match root {
        Value::Object(_) | Value::Array(_) => root,
        _ => Value::Object(Map::new()),
    };

    let mut current = &mut root;
    for (i, segment) in parents.iter().enumerate() {
        let next_is_index = segments[i + 1].is_index();
        let slot = slot_mut(current, segment);

        if !slot.is_object() && !slot.is_array() {
            *slot = if next_is_index {
                Value::Array(Vec::new())
            } else {
                Value::Object(Map::new())
            };
        }
        current = slot;
    }

    *slot_mut(current, last) = value;
    root
}

/// Walks `segments` from `root`. Shared by [`get_path`] and the deep key selectors.
pub(crate) fn walk<'v>(root: &'v Value, segments: &[Segment]) -> Option<&'v Value> {
    let mut current = root;
    for segment in segments {
        current = child(current, segment)?;
    }
    Some(current)
}

/// Reads one property off `value`. Objects are keyed by name and arrays by index; everything else
/// has no properties.
pub(crate) fn child<'v>(value: &'v Value, segment: &Segment) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(segment.name()),
        Value::Array(items) => items.get(segment.index()?),
        _ => None,
    }
}

/// Returns the slot for `segment` inside `container`, creating it as `null` if needed. The
/// container must be an object or an array.
fn slot_mut<'v>(container: &'v mut Value, segment: &Segment) -> &'v mut Value {
    let fits = |len: usize| segment.index()
        .is_some_and(|index| index <= len.saturating_add(MAX_ARRAY_GAP));

    if let Value::Array(items) = &*container
        && !fits(items.len())
    {
        let items = match mem::take(container) {
            Value::Array(items) => items,
            _ => Vec::new(),
        };
        *container = Value::Object(array_to_object(items));
    }

    match (container, segment.index()) {
        // Only reached when `fits` holds, so `index + 1` can't overflow.
        (Value::Array(items), Some(index)) => {
            if index >= items.len() {
                items.resize(index + 1, Value::Null);
            }
            &mut items[index]
        },
        (Value::Object(map), _) => map.entry(segment.name()).or_insert(Value::Null),
        // UNREACHABLE: Callers only pass containers, and arrays paired with a non-index or
        // out-of-reach segment were converted to objects above.
        (other, _) => other,
    }
}

fn array_to_object(items: Vec<Value>) -> Map<String, Value> {
    items.into_iter()
        .enumerate()
        .map(|(i, item)| (i.to_string(), item))
        .collect()
}
