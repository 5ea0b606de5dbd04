use std::fmt::{self, Debug, Formatter};

use indexmap::IndexMap;
use serde_json::Value;

use super::Object;

type Transform = Box<dyn Fn(Value) -> Value + Send + Sync>;

/// A tree of per-key transformations for [`evolve`].
///
/// Each key holds either a function applied to the value found under that key, or a nested
/// `Evolver` applied to it when that value is an object or an array.
///
/// ```
/// # use hot_collections::object::{evolve, Evolver};
/// # use serde_json::{json, Value};
/// let evolver = Evolver::new()
///     .apply("name", |v| Value::from(v.as_str().unwrap_or_default().to_uppercase()))
///     .nest("data", Evolver::new().apply("count", |v| Value::from(v.as_i64().unwrap_or(0) + 1)));
///
/// let object = json!({ "name": "foo", "data": { "count": 5 }, "other": true });
/// let Value::Object(object) = object else { unreachable!() };
///
/// assert_eq!(
///     Value::Object(evolve(&evolver, object)),
///     json!({ "name": "FOO", "data": { "count": 6 }, "other": true }),
/// );
/// ```
#[derive(Default)]
pub struct Evolver {
    rules: IndexMap<String, Rule>,
}

enum Rule {
    Apply(Transform),
    Nest(Evolver),
}

impl Evolver {
    pub fn new() -> Evolver {
        Evolver::default()
    }

    /// Transforms the value under `key` with `f`. Replaces any rule already set for `key`.
    pub fn apply<F>(mut self, key: impl Into<String>, f: F) -> Evolver
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.rules.insert(key.into(), Rule::Apply(Box::new(f)));
        self
    }

    /// Evolves the value under `key` with `nested`. Replaces any rule already set for `key`.
    pub fn nest(mut self, key: impl Into<String>, nested: Evolver) -> Evolver {
        self.rules.insert(key.into(), Rule::Nest(nested));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn run(&self, key: &str, value: Value) -> Value {
        match self.rules.get(key) {
            None => value,
            Some(Rule::Apply(f)) => f(value),
            Some(Rule::Nest(nested)) => match value {
                Value::Object(object) => Value::Object(evolve(nested, object)),
                Value::Array(items) => Value::Array(evolve_items(nested, items)),
                other => other,
            },
        }
    }
}

impl Debug for Evolver {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rules.iter()).finish()
    }
}

impl Debug for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Apply(_) => write!(f, "<fn>"),
            Rule::Nest(nested) => Debug::fmt(nested, f),
        }
    }
}

/// Rebuilds `object` with the transformations in `evolver` applied to its entries.
///
/// Entries without a rule are moved across unchanged. A nested rule only applies when the value is
/// an object or an array (addressed by index keys such as `"0"`). Anything else under a nested rule
/// is kept as is. Key order is preserved, and arrays stay arrays.
pub fn evolve(evolver: &Evolver, object: Object) -> Object {
    if evolver.is_empty() {
        return object;
    }

    object.into_iter()
        .map(|(key, value)| {
            let value = evolver.run(&key, value);
            (key, value)
        })
        .collect()
}

fn evolve_items(evolver: &Evolver, items: Vec<Value>) -> Vec<Value> {
    if evolver.is_empty() {
        return items;
    }

    items.into_iter()
        .enumerate()
        .map(|(index, item)| evolver.run(&index.to_string(), item))
        .collect()
}
