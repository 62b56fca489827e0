//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! JSON has no absence marker and no sparse arrays, so the mapping into JSON
//! is lossy in the same way `JSON.stringify` is: gaps and `undefined` slots
//! become `null`, `undefined` object entries are dropped, and named
//! properties of a sequence are not serialized. A JSON array is dense, so
//! converting a sequence allocates one element per position, gaps included.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number};

use crate::value::{Keyed, Sequence, Value};

// 2^53: integers below this magnitude round-trip through f64 exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Sequence(arr.into_iter().map(Value::from).collect::<Sequence>())
            }
            serde_json::Value::Object(obj) => Value::Keyed(
                obj.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Keyed>(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        Value::from(value.clone())
    }
}

fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < MAX_SAFE_INTEGER {
        return serde_json::Value::Number(Number::from(n as i64));
    }
    match Number::from_f64(n) {
        Some(num) => serde_json::Value::Number(num),
        // NaN and infinities have no JSON form.
        None => serde_json::Value::Null,
    }
}

impl Value {
    /// Convert into a `serde_json::Value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use obj_each_util::Value;
    /// use serde_json::json;
    ///
    /// let value = Value::from(json!({"a": [1, 2.5, null]}));
    /// assert_eq!(value.to_json(), json!({"a": [1, 2.5, null]}));
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Undefined | Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => number_to_json(*n),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Sequence(seq) => serde_json::Value::Array(
                (0..seq.len())
                    .map(|index| seq.get(index).map_or(serde_json::Value::Null, Value::to_json))
                    .collect(),
            ),
            Value::Keyed(map) => {
                let mut obj = Map::new();
                for (key, value) in map.iter() {
                    if !value.is_undefined() {
                        obj.insert(key.clone(), value.to_json());
                    }
                }
                serde_json::Value::Object(obj)
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}
