/// Splits `items` into those that pass `predicate` and those that don't, preserving order in
/// both halves.
pub fn partition<T, F>(items: &[T], predicate: F) -> (Vec<T>, Vec<T>)
where
    T: Clone,
    F: Fn(&T, usize, &[T]) -> bool,
{
    let mut pass = Vec::new();
    let mut fail = Vec::new();

    for (index, item) in items.iter().enumerate() {
        if predicate(item, index, items) {
            pass.push(item.clone());
        } else {
            fail.push(item.clone());
        }
    }

    (pass, fail)
}

/// Returns the items that pass `predicate`.
pub fn filter<T, F>(items: &[T], predicate: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, usize, &[T]) -> bool,
{
    let mut result = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index, items) {
            result.push(item.clone());
        }
    }
    result
}

/// Returns the index of every item that passes `predicate`, in ascending order.
pub fn find_indices<T, F>(items: &[T], predicate: F) -> Vec<usize>
where
    F: Fn(&T, usize, &[T]) -> bool,
{
    (0..items.len())
        .filter(|&index| predicate(&items[index], index, items))
        .collect()
}
