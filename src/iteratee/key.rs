use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use serde_json::Value;

/// A hashable image of a dynamic value, used wherever a value has to act as a grouping or
/// membership key.
///
/// Equality follows same-value-zero for numbers (`NaN` equals itself, `0.0` equals `-0.0`, and
/// `1` equals `1.0`). Arrays compare element-wise and objects compare by their set of entries,
/// ignoring key order.
///
/// [`Display`] renders the key the way it would read as an object property name, which is what the
/// record-producing functions use for their keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Key {
    /// The key of a property that doesn't exist.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(NumberKey),
    String(String),
    Array(Vec<Key>),
    /// Entries sorted by name.
    Object(Vec<(String, Key)>),
}

impl Key {
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Key::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Key::Number(n) => Some(n.value()),
            _ => None,
        }
    }
}

/// A float with same-value-zero equality and a hash that agrees with it.
#[derive(Debug, Clone, Copy)]
pub struct NumberKey(f64);

impl NumberKey {
    pub const fn new(value: f64) -> NumberKey {
        NumberKey(value)
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for NumberKey {
    fn eq(&self, other: &Self) -> bool {
        // IEEE equality already treats 0.0 and -0.0 as equal, only NaN needs help.
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl Eq for NumberKey {}

impl Hash for NumberKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let bits = if self.0.is_nan() {
            f64::NAN.to_bits()
        } else if self.0 == 0.0 {
            0_u64
        } else {
            self.0.to_bits()
        };
        bits.hash(state);
    }
}

impl Display for NumberKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let n = self.0;
        if n.is_nan() {
            write!(f, "NaN")
        } else if n.is_infinite() {
            write!(f, "{}Infinity", if n < 0.0 { "-" } else { "" })
        } else if n == 0.0 {
            write!(f, "0")
        } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
            // Exponent form outside the fixed-notation range, signed as in `1e+21` and `1e-7`.
            let formatted = format!("{n:e}");
            match formatted.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    write!(f, "{mantissa}e+{exponent}")
                },
                _ => write!(f, "{formatted}"),
            }
        } else {
            write!(f, "{n}")
        }
    }
}

impl From<&Value> for Key {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Key::Null,
            Value::Bool(b) => Key::Bool(*b),
            Value::Number(n) => Key::Number(NumberKey(n.as_f64().unwrap_or(f64::NAN))),
            Value::String(s) => Key::String(s.clone()),
            Value::Array(items) => Key::Array(items.iter().map(Key::from).collect()),
            Value::Object(map) => {
                let mut entries: Vec<(String, Key)> = map.iter()
                    .map(|(k, v)| (k.clone(), Key::from(v)))
                    .collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                Key::Object(entries)
            },
        }
    }
}

impl From<Option<&Value>> for Key {
    fn from(value: Option<&Value>) -> Self {
        value.map_or(Key::Undefined, Key::from)
    }
}

impl From<Value> for Key {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Key::String(s),
            other => Key::from(&other),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::String(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::String(value)
    }
}

impl From<bool> for Key {
    fn from(value: bool) -> Self {
        Key::Bool(value)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Number(NumberKey(value))
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Number(NumberKey(value as f64))
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Number(NumberKey(f64::from(value)))
    }
}

impl From<u64> for Key {
    fn from(value: u64) -> Self {
        Key::Number(NumberKey(value as f64))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Number(NumberKey(value as f64))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Key::Undefined => write!(f, "undefined"),
            Key::Null => write!(f, "null"),
            Key::Bool(b) => write!(f, "{b}"),
            Key::Number(n) => write!(f, "{n}"),
            Key::String(s) => write!(f, "{s}"),
            Key::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    // Holes and nulls join as empty strings.
                    match item {
                        Key::Undefined | Key::Null => (),
                        other => write!(f, "{other}")?,
                    }
                }
                Ok(())
            },
            Key::Object(_) => write!(f, "[object Object]"),
        }
    }
}
