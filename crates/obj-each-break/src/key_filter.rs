use std::fmt;

use for_each_break::Flow;
use indexmap::IndexSet;
use obj_each_util::{number_to_array_index, Key, Value};

/// A boxed entry test: `(value, key, collection)` to a verdict, or a stop.
pub type EntryTest<'f> = Box<dyn FnMut(&Value, Key<'_>, &Value) -> Flow<(), bool> + 'f>;

/// Selects collection entries for the copy and exclusion operations.
///
/// Whether a match means "copy" or "skip" depends on the operation.
pub enum Filter<'f> {
    /// Arbitrary test over `(value, key, collection)`. Returning a stop ends
    /// the operation early.
    Predicate(EntryTest<'f>),
    /// Entries whose key, in string form, is in the set.
    Keys(IndexSet<String>),
    /// Entries whose key loosely equals the scalar.
    Equals(Value),
    /// Built from an `Undefined` specifier. The copy operations copy
    /// nothing with it and [`has_own_properties`](crate::has_own_properties)
    /// treats it as no exclusion. As a bare test it selects every entry.
    Unspecified,
}

impl<'f> Filter<'f> {
    pub fn predicate<F>(test: F) -> Self
    where
        F: FnMut(&Value, Key<'_>, &Value) -> Flow<(), bool> + 'f,
    {
        Filter::Predicate(Box::new(test))
    }

    pub fn keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Filter::Keys(keys.into_iter().map(Into::into).collect())
    }

    pub fn equals(value: impl Into<Value>) -> Self {
        Filter::Equals(value.into())
    }

    /// Build a filter from a dynamic specifier.
    ///
    /// A sequence lists keys: strings are taken as they are, numbers that
    /// are valid indices by their decimal form, anything else is ignored.
    /// A keyed map contributes its own keys. `Undefined` resolves to
    /// [`Filter::Unspecified`]. Any other value is compared loosely against
    /// each key.
    ///
    /// # Examples
    ///
    /// ```
    /// use obj_each_break::Filter;
    /// use obj_each_util::Value;
    /// use serde_json::json;
    ///
    /// assert!(matches!(Filter::from_value(&Value::from(json!(["a", 1, -1]))), Filter::Keys(k) if k.len() == 2));
    /// assert!(matches!(Filter::from_value(&Value::from(json!({"0": ""}))), Filter::Keys(k) if k.contains("0")));
    /// assert!(matches!(Filter::from_value(&Value::from("0")), Filter::Equals(_)));
    /// assert!(matches!(Filter::from_value(&Value::Undefined), Filter::Unspecified));
    /// ```
    pub fn from_value(spec: &Value) -> Self {
        match spec {
            Value::Sequence(seq) => Filter::Keys(
                seq.values()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => number_to_array_index(*n).map(|index| index.to_string()),
                        _ => None,
                    })
                    .collect(),
            ),
            Value::Keyed(map) => Filter::Keys(map.keys().cloned().collect()),
            Value::Undefined => Filter::Unspecified,
            other => Filter::Equals(other.clone()),
        }
    }

    /// Resolve into a single entry test, once, ahead of the loop.
    pub fn into_test(self) -> EntryTest<'f> {
        match self {
            Filter::Predicate(test) => test,
            Filter::Keys(keys) => Box::new(move |_: &Value, key: Key<'_>, _: &Value| {
                Flow::Continue(keys.contains(&*key.to_key_string()))
            }),
            Filter::Equals(expected) => Box::new(move |_: &Value, key: Key<'_>, _: &Value| {
                Flow::Continue(key.loose_eq(&expected))
            }),
            Filter::Unspecified => Box::new(|_: &Value, _: Key<'_>, _: &Value| Flow::Continue(true)),
        }
    }
}

impl fmt::Debug for Filter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Predicate(_) => f.write_str("Predicate(..)"),
            Filter::Keys(keys) => f.debug_tuple("Keys").field(keys).finish(),
            Filter::Equals(value) => f.debug_tuple("Equals").field(value).finish(),
            Filter::Unspecified => f.write_str("Unspecified"),
        }
    }
}

impl From<&Value> for Filter<'_> {
    fn from(spec: &Value) -> Self {
        Filter::from_value(spec)
    }
}
