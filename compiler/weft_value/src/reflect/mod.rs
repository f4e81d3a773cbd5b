//! Host data adapter.
//!
//! Any `serde::Serialize` value converts into the value model by going
//! through `serde_json::Value`, whose `preserve_order` feature keeps object
//! fields in declaration order. Only serialized fields are visible, so
//! `#[serde(skip)]` plays the role of a private member.

use serde::Serialize;

use crate::Value;

/// Convert host data into a value.
///
/// Objects become dictionary maps keyed by field name, sequences become
/// array maps, `null` becomes void.
pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(data).map(Value::from)
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Void,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Void, Value::Number),
            serde_json::Value::String(s) => Value::from(s),
            serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(fields) => fields
                .into_iter()
                .map(|(name, field)| (Value::from(name), Value::from(field)))
                .collect(),
        }
    }
}

impl Value {
    /// Convert host data into a value; see [`from_serialize`].
    pub fn from_serialize<T: Serialize + ?Sized>(data: &T) -> Result<Value, serde_json::Error> {
        from_serialize(data)
    }
}
