use std::fmt::Display;
use std::hash::Hash;

use derive_more::{From, IsVariant};
use indexmap::IndexMap;

use super::Record;

/// Buckets `items` by the key `selector` derives from each one.
///
/// Groups appear in the order their keys were first seen and each group holds its items in input
/// order, so every item lands in exactly one group.
pub fn group_by<T, K, F>(items: &[T], selector: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T, usize) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for (index, item) in items.iter().enumerate() {
        groups.entry(selector(item, index)).or_default().push(item.clone());
    }
    groups
}

/// Like [`group_by`], but the groups are stored in a [`Record`] under the string form of each key.
///
/// Keys that render to the same string share a group, so `1` and `"1"` are grouped together.
pub fn group_by_record<T, K, F>(items: &[T], selector: F) -> Record<Vec<T>>
where
    T: Clone,
    K: Display,
    F: Fn(&T, usize) -> K,
{
    let mut record: Record<Vec<T>> = Record::new();
    for (index, item) in items.iter().enumerate() {
        record.entries
            .entry(selector(item, index).to_string())
            .or_default()
            .push(item.clone());
    }
    record
}

/// The container [`group_by_as`] should build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, IsVariant)]
pub enum GroupShape {
    /// An [`IndexMap`] keyed by the keys themselves.
    #[default]
    Map,
    /// A [`Record`] keyed by the keys' string forms.
    Record,
}

/// The result of [`group_by_as`]: whichever container was asked for.
#[derive(Debug, Clone, PartialEq, Eq, From, IsVariant)]
pub enum Grouped<K: Hash + Eq, T> {
    Map(IndexMap<K, Vec<T>>),
    Record(Record<Vec<T>>),
}

impl<K: Hash + Eq, T> Grouped<K, T> {
    /// Returns the number of groups.
    pub fn len(&self) -> usize {
        match self {
            Grouped::Map(map) => map.len(),
            Grouped::Record(record) => record.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups `items` into the container selected by `shape`. See [`group_by`] and
/// [`group_by_record`].
pub fn group_by_as<T, K, F>(items: &[T], selector: F, shape: GroupShape) -> Grouped<K, T>
where
    T: Clone,
    K: Hash + Eq + Display,
    F: Fn(&T, usize) -> K,
{
    match shape {
        GroupShape::Map => Grouped::Map(group_by(items, selector)),
        GroupShape::Record => Grouped::Record(group_by_record(items, selector)),
    }
}

/// Maps the string form of each derived key to the last item that produced it.
///
/// A key keeps the position where it was first seen even when a later item replaces its value.
pub fn index_by<T, K, F>(items: &[T], selector: F) -> Record<T>
where
    T: Clone,
    K: Display,
    F: Fn(&T, usize) -> K,
{
    let mut record = Record::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        record.entries.insert(selector(item, index).to_string(), item.clone());
    }
    record
}

/// Counts how many items produce each derived key.
pub fn count_by<T, K, F>(items: &[T], selector: F) -> Record<usize>
where
    K: Display,
    F: Fn(&T, usize) -> K,
{
    let mut record = Record::new();
    for (index, item) in items.iter().enumerate() {
        *record.entries.entry(selector(item, index).to_string()).or_insert(0) += 1;
    }
    record
}
