#![cfg(test)]

use serde_json::{json, Value};

use super::*;
use crate::iteratee::{property, Key};

#[test]
fn test_intersect_arity() {
    let empty: [&[i32]; 0] = [];
    assert_eq!(intersect(&empty), Vec::<i32>::new(), "No collections intersect to nothing.");
    assert_eq!(
        intersect(&[&[1, 1, 2][..]]),
        [1, 1, 2],
        "A single collection should be copied with its duplicates."
    );
    assert_eq!(intersect(&[&[1, 2, 3][..], &[2, 3, 4]]), [2, 3]);
    assert_eq!(intersect(&[&[1, 2, 3][..], &[2, 3, 4], &[3, 4, 5]]), [3]);
}

#[test]
fn test_intersect_empty_inputs() {
    assert_eq!(intersect(&[&[][..], &[1, 2]]), Vec::<i32>::new());
    assert_eq!(intersect(&[&[1, 2][..], &[]]), Vec::<i32>::new());
    assert_eq!(intersect(&[&[1, 2][..], &[3, 4]]), Vec::<i32>::new());
    assert_eq!(intersect(&[&[1, 2][..], &[2], &[]]), Vec::<i32>::new());
}

#[test]
fn test_intersect_pair_dedupes_in_first_order() {
    assert_eq!(
        intersect(&[&[1, 1, 2][..], &[1, 2]]),
        [1, 2],
        "Consuming the second set should drop later duplicates from the first."
    );
    assert_eq!(intersect(&[&[3, 1, 2, 3, 1][..], &[1, 2, 3]]), [3, 1, 2]);
}

#[test]
fn test_intersect_many_follows_shortest_collection() {
    assert_eq!(
        intersect(&[&[3, 2, 1, 1][..], &[1, 2, 3, 4], &[2, 3]]),
        [2, 3],
        "With three or more collections, the shortest one drives the order."
    );
    assert_eq!(
        intersect(&[&[3, 2][..], &[1, 2, 3], &[2, 3]]),
        [3, 2],
        "The first collection should win ties for shortest."
    );
    assert_eq!(
        intersect(&[&[1, 2, 3, 4, 5][..], &[2, 1, 1, 2], &[0, 1, 2, 3, 4]]),
        [2, 1],
        "The seen-set should deduplicate matches."
    );
}

#[test]
fn test_intersect_same_value_zero() {
    let first = [Key::from(f64::NAN), Key::from(0.0), Key::from(1)];
    let second = [Key::from(-0.0), Key::from(f64::NAN)];

    assert_eq!(
        intersect(&[&first[..], &second]),
        [Key::from(f64::NAN), Key::from(0.0)],
        "NaN should meet NaN and the signed zeroes should meet each other."
    );
}

#[test]
fn test_intersect_by_function() {
    let first = [json!({ "id": 1 }), json!({ "id": 2 })];
    let second = [json!({ "id": 2 }), json!({ "id": 3 })];

    assert_eq!(
        intersect_by(&[&first[..], &second], |item: &Value, _: usize| item["id"].as_i64()),
        [json!({ "id": 2 })]
    );
}

#[test]
fn test_intersect_by_path() {
    let first = [json!({ "id": 1 }), json!({ "id": 2 })];
    let second = [json!({ "id": 2 }), json!({ "id": 3 })];

    assert_eq!(intersect_by(&[&first[..], &second], property("id")), [json!({ "id": 2 })]);
    assert_eq!(
        intersect_by(&[&[json!({ "id": 1 })][..], &[json!({ "id": 2 })]], property("id")),
        Vec::<Value>::new()
    );
}

#[test]
fn test_intersect_by_keeps_first_item_per_key() {
    let first = [
        json!({ "id": 1, "tag": "a" }),
        json!({ "id": 1, "tag": "b" }),
        json!({ "id": 2, "tag": "c" }),
    ];
    let second = [json!({ "id": 1 }), json!({ "id": 2 })];

    assert_eq!(
        intersect_by(&[&first[..], &second], property("id")),
        [json!({ "id": 1, "tag": "a" }), json!({ "id": 2, "tag": "c" })]
    );
    assert_eq!(
        intersect_by(&[&first[..], &second, &second], property("id")),
        [json!({ "id": 1, "tag": "a" }), json!({ "id": 2, "tag": "c" })],
        "The n-way path should agree with the pair path on duplicates."
    );
}

#[test]
fn test_intersect_by_many() {
    let a = [json!({ "id": 1 }), json!({ "id": 2 }), json!({ "id": 3 })];
    let b = [json!({ "id": 2 }), json!({ "id": 3 }), json!({ "id": 4 })];
    let c = [json!({ "id": 3 }), json!({ "id": 4 }), json!({ "id": 5 })];
    assert_eq!(intersect_by(&[&a[..], &b, &c], property("id")), [json!({ "id": 3 })]);

    let b = [json!({ "id": 2 }), json!({ "id": 3 })];
    let c = [json!({ "id": 2 }), json!({ "id": 3 }), json!({ "id": 4 })];
    let d = [json!({ "id": 2 }), json!({ "id": 5 })];
    assert_eq!(intersect_by(&[&a[..], &b, &c, &d], property("id")), [json!({ "id": 2 })]);

    let none = [json!({ "id": 9 })];
    assert_eq!(intersect_by(&[&a[..], &b, &none], property("id")), Vec::<Value>::new());
}

#[test]
fn test_intersect_by_passes_own_indices() {
    let first = ["a", "b", "c"];
    let second = ["x", "y"];

    // Keying by position: only indices present in both collections survive.
    assert_eq!(intersect_by(&[&first[..], &second], |_: &&str, index: usize| index), ["a", "b"]);
}

#[test]
fn test_unique() {
    assert_eq!(unique(&[1, 2, 2, 3, 1]), [1, 2, 3]);
    assert_eq!(unique(&[3, 1, 2, 1, 3]), [3, 1, 2], "First occurrences should keep their order.");
    assert_eq!(unique::<i32>(&[]), Vec::<i32>::new());
    assert_eq!(dedupe(&["a", "b", "a", "c"]), ["a", "b", "c"]);
}

#[test]
fn test_unique_by_key() {
    let items = [json!({ "id": 1 }), json!({ "id": 2 }), json!({ "id": 1, "late": true })];

    assert_eq!(
        unique_by_key(&items, property("id")),
        [json!({ "id": 1 }), json!({ "id": 2 })],
        "The first item for each key should be kept."
    );
    assert_eq!(unique_by_key(&[1, 2, 3, 4, 5], |n: &i32, _: usize| n % 2), [1, 2]);
    assert_eq!(unique_by_key::<Value, Key, _>(&[], property("id")), Vec::<Value>::new());
}

#[test]
fn test_unique_by_predicate() {
    let words = ["Apple", "apple", "Banana", "APPLE", "banana"];
    assert_eq!(
        unique_by_predicate(&words, |a: &&str, b: &&str| a.eq_ignore_ascii_case(b)),
        ["Apple", "Banana"]
    );
    assert_eq!(unique_by_predicate(&[1, 2, 3], |_: &i32, _: &i32| false), [1, 2, 3]);
}

#[test]
fn test_partition() {
    let (even, odd) = partition(&[1, 2, 3, 4, 5], |n: &i32, _: usize, _: &[i32]| n % 2 == 0);
    assert_eq!(even, [2, 4]);
    assert_eq!(odd, [1, 3, 5]);

    let (pass, fail) = partition(&[] as &[i32], |_: &i32, _: usize, _: &[i32]| true);
    assert!(pass.is_empty() && fail.is_empty());
}

#[test]
fn test_filter_and_find_indices() {
    let items = [5, 1, 8, 3, 9];

    assert_eq!(filter(&items, |n: &i32, _: usize, _: &[i32]| *n > 4), [5, 8, 9]);
    assert_eq!(find_indices(&items, |n: &i32, _: usize, _: &[i32]| *n > 4), [0, 2, 4]);
    assert_eq!(
        find_indices(&items, |_: &i32, index: usize, all: &[i32]| index + 1 == all.len()),
        [4],
        "Predicates should see the index and the whole slice."
    );
}
