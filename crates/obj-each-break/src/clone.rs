use obj_each_util::Value;

use crate::error::ObjEachError;

/// Structural copy. Values own their children, so this is the derived
/// `Clone`; sequence gaps and named properties are kept.
///
/// # Examples
///
/// ```
/// use obj_each_break::deep_clone;
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let original = Value::from(json!({"foo": [1, {"bar": null}]}));
/// assert_eq!(deep_clone(&original), original);
/// ```
pub fn deep_clone(value: &Value) -> Value {
    value.clone()
}

/// One-level copy of a collection, keeping its shape and a sequence's named
/// properties.
pub fn clone_array_object(value: &Value) -> Result<Value, ObjEachError> {
    match value {
        Value::Sequence(_) | Value::Keyed(_) => Ok(value.clone()),
        other => Err(ObjEachError::InvalidReceiver {
            op: "clone_array_object",
            got: other.type_name(),
        }),
    }
}
