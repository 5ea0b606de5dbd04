use std::collections::HashSet;
use std::hash::Hash;

/// Removes duplicate items, keeping the first occurrence of each.
pub fn unique<T: Hash + Eq + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

pub use self::unique as dedupe;

/// Removes items whose derived key has already been seen, keeping the first item for each key in
/// first-occurrence order.
pub fn unique_by_key<T, K, F>(items: &[T], selector: F) -> Vec<T>
where
    T: Clone,
    K: Hash + Eq,
    F: Fn(&T, usize) -> K,
{
    let mut seen = HashSet::with_capacity(items.len());
    let mut result = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if seen.insert(selector(item, index)) {
            result.push(item.clone());
        }
    }

    result
}

/// Removes items that `eq` considers equal to an item already kept. `eq` is called as
/// `eq(candidate, kept)`.
///
/// This compares every candidate against every kept item, so it's `O(n²)`. Prefer
/// [`unique_by_key`] whenever equality can be expressed through a key.
pub fn unique_by_predicate<T, F>(items: &[T], eq: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut result: Vec<T> = Vec::new();

    for item in items {
        if !result.iter().any(|kept| eq(item, kept)) {
            result.push(item.clone());
        }
    }

    result
}
