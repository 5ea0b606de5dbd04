use std::fmt::{self, Debug, Display, Formatter};

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, Keys, Values};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{NotAnObjectError, Object};

/// An insertion-ordered map from string keys to values, with no members other than its entries.
///
/// This is the result type of every operation that builds a key-value structure from keys found in
/// data. Looking up `"constructor"`, `"__proto__"` or `"toString"` only ever finds an entry that
/// was inserted under that name.
///
/// Re-inserting an existing key replaces its value but keeps its original position.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the Record.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`* |
/// | `get` | `O(1)`* |
/// | `contains_key` | `O(1)`* |
/// | `remove` | `O(n)` |
///
/// \* Amortised, as with any hash table.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record<V> {
    pub(crate) entries: IndexMap<String, V>,
}

impl<V> Record<V> {
    pub fn new() -> Record<V> {
        Record {
            entries: IndexMap::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Record<V> {
        Record {
            entries: IndexMap::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts `value` under `key`, returning the previous value if there was one.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Removes the entry for `key`, shifting later entries down so the order is kept.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    pub fn keys(&self) -> Keys<'_, String, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> Values<'_, String, V> {
        self.entries.values()
    }

    pub fn iter(&self) -> Iter<'_, String, V> {
        self.entries.iter()
    }

    /// Converts the Record into a plain [`Object`] with the same entries in the same order.
    pub fn into_object(self) -> Object
    where
        V: Into<Value>,
    {
        self.entries.into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect()
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Record::new()
    }
}

impl<V> FromIterator<(String, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Record {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<V> Extend<(String, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (String, V);
    type IntoIter = IntoIter<String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Object> for Record<Value> {
    fn from(value: Object) -> Self {
        value.into_iter().collect()
    }
}

impl TryFrom<Value> for Record<Value> {
    type Error = NotAnObjectError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Record::from(map)),
            other => Err(NotAnObjectError::of(&other)),
        }
    }
}

impl<V: Into<Value>> From<Record<V>> for Value {
    fn from(value: Record<V>) -> Self {
        Value::Object(value.into_object())
    }
}

impl<V: Debug> Debug for Record<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<V: Debug> Display for Record<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
