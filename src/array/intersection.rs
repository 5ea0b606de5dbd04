use std::cmp;
use std::collections::HashSet;
use std::hash::Hash;

use tracing::trace;

/// Returns the values present in every one of `collections`, without duplicates.
///
/// Membership uses the items' [`Eq`], so for floating point data use
/// [`Key`](crate::iteratee::Key) (same-value-zero) as the item type.
///
/// The number of collections picks the algorithm:
/// - none: an empty result.
/// - one: a copy of it, duplicates included.
/// - two: the first collection is walked in order and each hit is removed from a set built from
///   the second, so the result follows the first collection's order.
/// - three or more: the shortest collection is walked against one set per other collection, with
///   a separate seen-set for deduplication. The result follows the order of that shortest
///   collection (the first one wins ties).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The total number of items across all collections.
/// - `s`: The length of the shortest collection.
/// - `c`: The number of collections.
///
/// | Arity | Complexity |
/// |-|-|
/// | `2` | `O(n)` |
/// | `3+` | `O(n + s * c)` |
pub fn intersect<T: Hash + Eq + Clone>(collections: &[&[T]]) -> Vec<T> {
    match collections {
        [] => Vec::new(),
        [only] => only.to_vec(),
        [first, second] => intersect_pair(first, second),
        _ => intersect_many(collections),
    }
}

/// Two-way intersection that consumes matches out of the second collection's set. Removing the
/// entry is what stops later duplicates in `first` from matching again, so no seen-set is kept.
fn intersect_pair<T: Hash + Eq + Clone>(first: &[T], second: &[T]) -> Vec<T> {
    let mut remaining: HashSet<&T> = second.iter().collect();
    let mut result = Vec::with_capacity(cmp::min(first.len(), remaining.len()));

    for item in first {
        if remaining.is_empty() {
            break;
        }
        if remaining.remove(item) {
            result.push(item.clone());
        }
    }

    result
}

/// N-way intersection driven by the shortest collection.
fn intersect_many<T: Hash + Eq + Clone>(collections: &[&[T]]) -> Vec<T> {
    let driving = shortest(collections.iter().map(|c| c.len()));
    trace!(arity = collections.len(), driving, "intersecting collections");

    let others: Vec<HashSet<&T>> = collections.iter()
        .enumerate()
        .filter(|(i, _)| *i != driving)
        .map(|(_, c)| c.iter().collect())
        .collect();

    let smallest = collections[driving];
    let mut seen = HashSet::with_capacity(smallest.len());
    let mut result = Vec::new();

    for item in smallest {
        if !seen.insert(item) {
            continue;
        }
        if others.iter().all(|set| set.contains(item)) {
            result.push(item.clone());
        }
    }

    result
}

/// Like [`intersect`], but items are compared by the key `selector` derives from them. The index
/// passed to `selector` is the item's position within its own collection.
///
/// The result always contains items of the first collection, in its order, keeping the first
/// item for each matching key. With three or more collections the key sets of the others are
/// checked smallest-first so that misses are found as early as possible.
pub fn intersect_by<T, K, F>(collections: &[&[T]], selector: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T, usize) -> K,
{
    match collections {
        [] => Vec::new(),
        [only] => only.to_vec(),
        [first, second] => intersect_pair_by(first, second, &selector),
        [first, rest @ ..] => intersect_many_by(first, rest, &selector),
    }
}

fn intersect_pair_by<T, K, F>(first: &[T], second: &[T], selector: &F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T, usize) -> K,
{
    let mut remaining = key_set(second, selector);
    let mut result = Vec::new();

    for (index, item) in first.iter().enumerate() {
        if remaining.is_empty() {
            break;
        }
        if remaining.remove(&selector(item, index)) {
            result.push(item.clone());
        }
    }

    result
}

fn intersect_many_by<T, K, F>(first: &[T], rest: &[&[T]], selector: &F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T, usize) -> K,
{
    let mut others: Vec<HashSet<K>> = rest.iter().map(|c| key_set(c, selector)).collect();
    others.sort_by_key(HashSet::len);
    trace!(arity = rest.len() + 1, "intersecting collections by key");

    if others.first().is_some_and(HashSet::is_empty) {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for (index, item) in first.iter().enumerate() {
        let key = selector(item, index);
        if seen.contains(&key) {
            continue;
        }
        if others.iter().all(|set| set.contains(&key)) {
            result.push(item.clone());
        }
        seen.insert(key);
    }

    result
}

fn key_set<T, K, F>(items: &[T], selector: &F) -> HashSet<K>
where
    K: Hash + Eq,
    F: Fn(&T, usize) -> K,
{
    items.iter()
        .enumerate()
        .map(|(index, item)| selector(item, index))
        .collect()
}

/// Returns the position of the smallest length, preferring the earliest on ties.
fn shortest(lens: impl Iterator<Item = usize>) -> usize {
    let mut best = (0, usize::MAX);
    for (i, len) in lens.enumerate() {
        if len < best.1 {
            best = (i, len);
        }
    }
    best.0
}
