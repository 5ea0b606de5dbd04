use derive_more::{Display, Error};
use serde_json::Value;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("expected an object, found {found}")]
pub struct NotAnObjectError {
    pub found: &'static str,
}

impl NotAnObjectError {
    pub(crate) const fn of(value: &Value) -> NotAnObjectError {
        NotAnObjectError {
            found: match value {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                Value::String(_) => "a string",
                Value::Array(_) => "an array",
                Value::Object(_) => "an object",
            },
        }
    }
}
