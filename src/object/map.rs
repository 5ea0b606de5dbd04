use serde_json::Value;

use super::Object;

/// Builds a new object with each key replaced by `mapper(key, value)`.
///
/// When two keys map to the same new key, the value of the later one wins, but the entry stays in
/// the position where that key was first produced.
pub fn map_keys<F>(object: &Object, mapper: F) -> Object
where
    F: Fn(&str, &Value) -> String,
{
    let mut result = Object::with_capacity(object.len());
    for (key, value) in object {
        result.insert(mapper(key.as_str(), value), value.clone());
    }
    result
}

/// Builds a new object with each value replaced by `mapper(value, key)`.
pub fn map_values<F>(object: &Object, mapper: F) -> Object
where
    F: Fn(&Value, &str) -> Value,
{
    object.iter()
        .map(|(key, value)| (key.clone(), mapper(value, key.as_str())))
        .collect()
}

pub use self::map_values as map_object;
