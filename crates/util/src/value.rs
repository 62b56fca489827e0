use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::coerce::{to_array_index, to_number};
use crate::key::Key;

/// A dynamically typed value that may hold a property collection.
///
/// `Undefined` is the absence marker: it can be stored in a collection (the
/// key is then structurally present) but copy and merge operations treat
/// such entries as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// Ordered, possibly sparse sequence with optional named properties.
    Sequence(Sequence),
    /// Keyed map of own properties.
    Keyed(Keyed),
}

impl Value {
    /// Create a sequence value from dense items.
    pub fn sequence<I, V>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Create a keyed map value from key/value pairs.
    pub fn keyed<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Keyed(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// `true` for `undefined` and `null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// `true` for sequences and keyed maps.
    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Sequence(_) | Value::Keyed(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_keyed(&self) -> bool {
        matches!(self, Value::Keyed(_))
    }

    /// Truthiness, as used by `if (value)`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Sequence(_) | Value::Keyed(_) => true,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Value::Sequence(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_keyed(&self) -> Option<&Keyed> {
        match self {
            Value::Keyed(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_keyed_mut(&mut self) -> Option<&mut Keyed> {
        match self {
            Value::Keyed(map) => Some(map),
            _ => None,
        }
    }

    /// Numeric conversion for scalars; collections convert to `NaN`.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::String(s) => to_number(s),
            Value::Sequence(_) | Value::Keyed(_) => f64::NAN,
        }
    }

    /// Strict (`===`) equality. Collections are never strictly equal to a
    /// value built elsewhere, so they never match.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => false,
        }
    }

    /// Name of the value's runtime type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "array",
            Value::Keyed(_) => "object",
        }
    }

    /// Look up an own entry of a collection.
    pub fn get(&self, key: Key<'_>) -> Option<&Value> {
        match self {
            Value::Sequence(seq) => seq.get_key(key),
            Value::Keyed(map) => map.get(&key.to_key_string()),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: Key<'_>) -> Option<&mut Value> {
        match self {
            Value::Sequence(seq) => seq.get_key_mut(key),
            Value::Keyed(map) => map.get_mut(&key.to_key_string()),
            _ => None,
        }
    }

    /// Check for an own entry, regardless of its value.
    pub fn has_own(&self, key: Key<'_>) -> bool {
        self.get(key).is_some()
    }

    /// Store an own entry. Returns `false` when `self` is not a collection.
    pub fn set(&mut self, key: Key<'_>, value: Value) -> bool {
        match self {
            Value::Sequence(seq) => {
                seq.set_key(key, value);
                true
            }
            Value::Keyed(map) => {
                map.insert(key.to_key_string().into_owned(), value);
                true
            }
            _ => false,
        }
    }

    /// Number of own entries (0 for non-collections).
    pub fn own_len(&self) -> usize {
        match self {
            Value::Sequence(seq) => seq.own_len(),
            Value::Keyed(map) => map.len(),
            _ => 0,
        }
    }

    /// An empty collection of the same shape; non-collections yield a keyed map.
    pub fn empty_like(&self) -> Value {
        match self {
            Value::Sequence(_) => Value::Sequence(Sequence::new()),
            _ => Value::Keyed(Keyed::new()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Sequence> for Value {
    fn from(seq: Sequence) -> Self {
        Value::Sequence(seq)
    }
}

impl From<Keyed> for Value {
    fn from(map: Keyed) -> Self {
        Value::Keyed(map)
    }
}

/// Ordered sequence of slots plus named properties.
///
/// Only present slots are stored; the length is tracked separately, so a
/// sparse gap costs nothing however wide it is. A gap counts towards
/// [`len`](Self::len) but is not an own entry. Named properties never use
/// index keys; those are always routed to slots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    slots: BTreeMap<usize, Value>,
    len: usize,
    named: IndexMap<String, Value>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot count, gaps included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Own entry count: present slots plus named properties.
    pub fn own_len(&self) -> usize {
        self.slots.len() + self.named.len()
    }

    pub fn push(&mut self, value: Value) {
        self.slots.insert(self.len, value);
        self.len += 1;
    }

    /// Append a sparse gap.
    pub fn push_hole(&mut self) {
        self.len += 1;
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.slots.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.slots.get_mut(&index)
    }

    /// Store a value at `index`, extending the length when it lies past the
    /// end. The skipped positions become gaps.
    pub fn set(&mut self, index: usize, value: Value) {
        self.slots.insert(index, value);
        self.len = self.len.max(index.saturating_add(1));
    }

    /// Remove the slot at `index`, shifting later slots down.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index >= self.len {
            return None;
        }
        let tail = self.slots.split_off(&index);
        let mut tail = tail.into_iter();
        let removed = match tail.next() {
            Some((at, value)) if at == index => Some(value),
            Some((at, value)) => {
                self.slots.insert(at - 1, value);
                None
            }
            None => None,
        };
        self.slots.extend(tail.map(|(at, value)| (at - 1, value)));
        self.len -= 1;
        removed
    }

    /// Index of the first present slot strictly equal to `value`.
    pub fn position(&self, value: &Value) -> Option<usize> {
        self.entries().find(|(_, v)| v.strict_eq(value)).map(|(index, _)| index)
    }

    /// Present slots keyed by index.
    pub fn slots(&self) -> &BTreeMap<usize, Value> {
        &self.slots
    }

    /// Present slots with their indices, ascending.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (usize, &Value)> + '_ {
        self.slots.iter().map(|(index, value)| (*index, value))
    }

    /// Present slot values.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + '_ {
        self.slots.values()
    }

    /// Named (non-index) properties.
    pub fn named(&self) -> &IndexMap<String, Value> {
        &self.named
    }

    pub fn get_named(&self, key: &str) -> Option<&Value> {
        self.named.get(key)
    }

    /// Store a property by its string key, routing index keys to slots.
    pub fn set_named(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match to_array_index(&key) {
            Some(index) => self.set(index, value),
            None => {
                self.named.insert(key, value);
            }
        }
    }

    pub fn get_key(&self, key: Key<'_>) -> Option<&Value> {
        match key {
            Key::Index(index) => self.get(index),
            Key::Named(name) => self.named.get(name),
        }
    }

    pub fn get_key_mut(&mut self, key: Key<'_>) -> Option<&mut Value> {
        match key {
            Key::Index(index) => self.get_mut(index),
            Key::Named(name) => self.named.get_mut(name),
        }
    }

    pub fn set_key(&mut self, key: Key<'_>, value: Value) {
        match key {
            Key::Index(index) => self.set(index, value),
            Key::Named(name) => {
                self.named.insert(name.to_owned(), value);
            }
        }
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        for value in iter {
            seq.push(value);
        }
        seq
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

/// Keyed map of own properties.
///
/// Index-like keys are stored as their canonical strings. Equality ignores
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Keyed {
    entries: IndexMap<String, Value>,
}

impl Keyed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&String, &Value)> + '_ {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &String> + '_ {
        self.entries.keys()
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + '_ {
        self.entries.values()
    }
}

impl FromIterator<(String, Value)> for Keyed {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
