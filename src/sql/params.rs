//! Typed positional arguments and their JSON form.

use serde_json::Value;

/// A value bound to one `$n` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Null,
    Text(String),
    Float(f64),
    Integer(i64),
}

impl BindValue {
    /// JSON representation as it appears in a listed row.
    pub fn to_json(&self) -> Value {
        match self {
            BindValue::Null => Value::Null,
            BindValue::Text(s) => Value::String(s.clone()),
            BindValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            BindValue::Integer(n) => Value::Number((*n).into()),
        }
    }
}
