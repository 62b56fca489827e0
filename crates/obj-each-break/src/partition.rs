//! Splitting a collection's own keys into index keys and named keys.

use std::collections::BTreeMap;

use obj_each_util::{Key, Value};

/// Index-keyed entries of a collection, in ascending index order.
///
/// A sequence lends its present slots directly; a keyed map has its
/// index-like keys collected and sorted.
#[derive(Debug, Clone)]
pub enum IndexValues<'a> {
    Slots(&'a BTreeMap<usize, Value>),
    Collected(Vec<(usize, &'a Value)>),
}

impl<'a> IndexValues<'a> {
    /// Number of present entries.
    pub fn len(&self) -> usize {
        match self {
            IndexValues::Slots(slots) => slots.len(),
            IndexValues::Collected(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entry stored under `index`, if present.
    pub fn get(&self, index: usize) -> Option<&'a Value> {
        match self {
            IndexValues::Slots(slots) => {
                let slots: &'a BTreeMap<usize, Value> = slots;
                slots.get(&index)
            }
            IndexValues::Collected(entries) => entries
                .binary_search_by_key(&index, |(at, _)| *at)
                .ok()
                .map(|pos| entries[pos].1),
        }
    }

    /// Present entries, ascending.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, &'a Value)> + '_ {
        let (slots, collected) = match self {
            IndexValues::Slots(slots) => {
                let slots: &'a BTreeMap<usize, Value> = slots;
                (Some(slots.iter().map(|(index, value)| (*index, value))), None)
            }
            IndexValues::Collected(entries) => (None, Some(entries.iter().copied())),
        };
        slots.into_iter().flatten().chain(collected.into_iter().flatten())
    }
}

/// A collection's own entries, partitioned by key kind.
#[derive(Debug, Clone)]
pub struct ArrayObjectKeys<'a> {
    pub array_values: IndexValues<'a>,
    /// Named entries in storage order.
    pub object_keys: Vec<(&'a str, &'a Value)>,
}

impl ArrayObjectKeys<'_> {
    /// Sort named entries ascending by code point.
    pub fn sort_object_keys(&mut self) {
        self.object_keys.sort_unstable_by(|a, b| a.0.cmp(b.0));
    }

    /// Own entry count across both buckets.
    pub fn own_len(&self) -> usize {
        self.array_values.len() + self.object_keys.len()
    }
}

/// Partition the own keys of `value`. Non-collections yield empty buckets.
///
/// # Examples
///
/// ```
/// use obj_each_break::array_object_keys;
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"b": 1, "1": 2, "a": 3, "0": 4}));
/// let keys = array_object_keys(&value);
/// let indices: Vec<usize> = keys.array_values.iter().map(|(i, _)| i).collect();
/// assert_eq!(indices, vec![0, 1]);
/// let named: Vec<&str> = keys.object_keys.iter().map(|(k, _)| *k).collect();
/// assert_eq!(named, vec!["b", "a"]);
/// ```
pub fn array_object_keys(value: &Value) -> ArrayObjectKeys<'_> {
    match value {
        Value::Sequence(seq) => ArrayObjectKeys {
            array_values: IndexValues::Slots(seq.slots()),
            object_keys: seq.named().iter().map(|(k, v)| (k.as_str(), v)).collect(),
        },
        Value::Keyed(map) => {
            let mut indexed = Vec::new();
            let mut named = Vec::new();
            for (key, entry) in map.iter() {
                match Key::parse(key) {
                    Key::Index(index) => indexed.push((index, entry)),
                    Key::Named(name) => named.push((name, entry)),
                }
            }
            indexed.sort_unstable_by_key(|(index, _)| *index);
            ArrayObjectKeys {
                array_values: IndexValues::Collected(indexed),
                object_keys: named,
            }
        }
        _ => ArrayObjectKeys {
            array_values: IndexValues::Collected(Vec::new()),
            object_keys: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obj_each_util::Sequence;
    use serde_json::json;

    #[test]
    fn test_sequence_partition() {
        let mut seq = Sequence::new();
        seq.push(Value::from(1));
        seq.push_hole();
        seq.push(Value::Undefined);
        seq.set_named("prop", Value::from("field"));
        seq.set_named("-1", Value::from(-1));
        let value = Value::Sequence(seq);

        let keys = array_object_keys(&value);
        assert_eq!(keys.array_values.len(), 2);
        assert_eq!(keys.array_values.get(1), None);
        assert_eq!(keys.array_values.get(2), Some(&Value::Undefined));
        assert_eq!(
            keys.array_values.iter().collect::<Vec<_>>(),
            vec![(0, &Value::from(1)), (2, &Value::Undefined)]
        );
        let named: Vec<&str> = keys.object_keys.iter().map(|(k, _)| *k).collect();
        assert_eq!(named, vec!["prop", "-1"]);
        assert_eq!(keys.own_len(), 4);
    }

    #[test]
    fn test_keyed_partition_sorts_indices() {
        let value = Value::from(json!({"10": "ten", "x": 0, "2": "two", "02": "pad", "-3": 1}));
        let mut keys = array_object_keys(&value);
        let indices: Vec<usize> = keys.array_values.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![2, 10]);
        assert_eq!(keys.array_values.get(10), Some(&Value::from("ten")));
        assert_eq!(keys.array_values.get(3), None);

        keys.sort_object_keys();
        let named: Vec<&str> = keys.object_keys.iter().map(|(k, _)| *k).collect();
        assert_eq!(named, vec!["-3", "02", "x"]);
        assert_eq!(keys.own_len(), value.own_len());
    }

    #[test]
    fn test_far_sequence_index_is_visited_lazily() {
        let mut seq = Sequence::new();
        seq.set(4_294_967_294, Value::from(1));
        let value = Value::Sequence(seq);
        let keys = array_object_keys(&value);
        assert_eq!(keys.array_values.iter().rev().collect::<Vec<_>>(), vec![(4_294_967_294, &Value::from(1))]);
    }

    #[test]
    fn test_scalar_partition_is_empty() {
        for value in [Value::Undefined, Value::Null, Value::from(5), Value::from("abc")] {
            let keys = array_object_keys(&value);
            assert!(keys.array_values.is_empty());
            assert!(keys.object_keys.is_empty());
        }
    }
}
