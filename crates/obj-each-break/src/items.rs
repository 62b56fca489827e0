use obj_each_util::{to_array_index, Sequence, Value};

/// Remove items from a sequence, returning how many were removed.
///
/// Items are processed last to first. A sequence item stands for its
/// present values and a keyed map item for its keys, expanded recursively.
/// Any other item removes the first slot strictly equal to it. Receivers
/// that are not sequences are left alone.
///
/// # Examples
///
/// ```
/// use obj_each_break::delete_items;
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let mut list = Value::from(json!(["a", "b", 1, "c", "b"]));
/// let removed = delete_items(&mut list, &[Value::from("b"), Value::from(json!([1, "x"]))]);
/// assert_eq!(removed, 2);
/// assert_eq!(list, Value::from(json!(["a", "c", "b"])));
/// ```
pub fn delete_items(target: &mut Value, items: &[Value]) -> usize {
    match target.as_sequence_mut() {
        Some(seq) => delete_from(seq, items),
        None => 0,
    }
}

fn delete_from(seq: &mut Sequence, items: &[Value]) -> usize {
    let mut removed = 0;
    for item in items.iter().rev() {
        match item {
            Value::Sequence(nested) => {
                let values: Vec<Value> = nested.values().cloned().collect();
                removed += delete_from(seq, &values);
            }
            Value::Keyed(map) => {
                let keys: Vec<Value> = map.keys().map(|key| Value::from(key.as_str())).collect();
                removed += delete_from(seq, &keys);
            }
            scalar => {
                if let Some(pos) = seq.position(scalar) {
                    seq.remove(pos);
                    removed += 1;
                }
            }
        }
    }
    removed
}

/// Sequence length, or one past the highest index key of a keyed map.
/// Anything else has length 0.
pub fn array_length(value: &Value) -> usize {
    match value {
        Value::Sequence(seq) => seq.len(),
        Value::Keyed(map) => map
            .keys()
            .filter_map(|key| to_array_index(key))
            .map(|index| index + 1)
            .max()
            .unwrap_or(0),
        _ => 0,
    }
}
