use std::collections::HashSet;

use serde_json::Value;

use super::Object;

/// Returns a new object holding only the entries of `object` whose key appears in `keys`.
///
/// Entries keep the order they have in `object`, not the order of `keys`. Keys that `object`
/// doesn't have are ignored.
pub fn pick<S: AsRef<str>>(object: &Object, keys: &[S]) -> Object {
    let wanted: HashSet<&str> = keys.iter().map(AsRef::as_ref).collect();
    retain(object, |_, key| wanted.contains(key))
}

/// Returns a new object without the entries whose key appears in `keys`.
pub fn omit<S: AsRef<str>>(object: &Object, keys: &[S]) -> Object {
    let unwanted: HashSet<&str> = keys.iter().map(AsRef::as_ref).collect();
    retain(object, |_, key| !unwanted.contains(key))
}

/// Returns a new object holding the entries for which `predicate(value, key)` is `true`.
pub fn pick_by<F>(object: &Object, predicate: F) -> Object
where
    F: Fn(&Value, &str) -> bool,
{
    retain(object, predicate)
}

/// Returns a new object holding the entries for which `predicate(value, key)` is `false`.
pub fn omit_by<F>(object: &Object, predicate: F) -> Object
where
    F: Fn(&Value, &str) -> bool,
{
    retain(object, |value, key| !predicate(value, key))
}

fn retain<F>(object: &Object, keep: F) -> Object
where
    F: Fn(&Value, &str) -> bool,
{
    object.iter()
        .filter(|&(key, value)| keep(value, key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
