#![cfg(feature = "collections-all")]

use std::collections::HashSet;

use hot_collections::array::intersect;
use hot_collections::object::{evolve, pick, Evolver, Object};
use hot_collections::path::{get_path, set_path};
use proptest::prelude::*;
use serde_json::{json, Value};

fn dedup(items: &[u8]) -> Vec<u8> {
    let mut seen = HashSet::new();
    items.iter().copied().filter(|n| seen.insert(*n)).collect()
}

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-c]",
        4 => "[0-3]",
        1 => "0[0-9]{1,3}",
        1 => "[1-9][0-9]{3,12}",
        1 => "429496729[4-9]",
        1 => "1844674407370955161[5-9]",
        1 => "[1-9][0-9]{20,24}"
    ]
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..5).prop_map(|segments| segments.join("."))
}

fn object() -> impl Strategy<Value = Object> {
    prop::collection::vec(("[a-f]", any::<i32>()), 0..8)
        .prop_map(|entries| entries.into_iter().map(|(k, v)| (k, json!(v))).collect())
}

proptest! {
    #[test]
    fn proptest_intersect_pair(
        first in prop::collection::vec(0_u8..20, 0..30),
        second in prop::collection::vec(0_u8..20, 0..30)
    ) {
        let expected: Vec<u8> = dedup(&first).into_iter()
            .filter(|n| second.contains(n))
            .collect();

        prop_assert_eq!(intersect(&[first.as_slice(), second.as_slice()]), expected);
    }

    #[test]
    fn proptest_intersect_many(
        collections in prop::collection::vec(prop::collection::vec(0_u8..10, 0..20), 3..6)
    ) {
        let slices: Vec<&[u8]> = collections.iter().map(Vec::as_slice).collect();
        let result = intersect(slices.as_slice());

        let unique: HashSet<u8> = result.iter().copied().collect();
        prop_assert_eq!(unique.len(), result.len(), "results should be deduplicated");

        let expected: HashSet<u8> = (0..10)
            .filter(|n| collections.iter().all(|c| c.contains(n)))
            .collect();
        prop_assert_eq!(unique, expected);
    }

    #[test]
    fn proptest_pick_keeps_source_order(
        source in object(),
        keys in prop::collection::vec("[a-h]", 0..6)
    ) {
        let picked = pick(&source, keys.as_slice());
        let expected: Vec<&String> = source.keys().filter(|k| keys.contains(k)).collect();

        prop_assert_eq!(picked.keys().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn proptest_evolve_identity(source in object()) {
        prop_assert_eq!(evolve(&Evolver::new(), source.clone()), source);
    }

    #[test]
    fn proptest_get_after_set(
        writes in prop::collection::vec((path(), any::<i64>()), 0..5),
        target in path(),
        value in any::<i64>()
    ) {
        let mut root = Value::Object(Object::new());
        for (path, n) in &writes {
            root = set_path(root, path.as_str(), json!(n));
        }

        let root = set_path(root, target.as_str(), json!(value));
        prop_assert_eq!(get_path(&root, target.as_str()), Some(&json!(value)));
    }
}
