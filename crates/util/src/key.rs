use std::borrow::Cow;
use std::fmt;

use crate::coerce::{to_array_index, to_number};
use crate::value::Value;

/// An own key of a property collection.
///
/// Index keys are always handed out in their numeric form, so a keyed map
/// entry stored under `"3"` is reported as `Key::Index(3)` exactly like the
/// fourth slot of a sequence.
///
/// # Examples
///
/// ```
/// use obj_each_util::Key;
///
/// assert_eq!(Key::parse("3"), Key::Index(3));
/// assert_eq!(Key::parse("03"), Key::Named("03"));
/// assert_eq!(Key::parse("-1"), Key::Named("-1"));
/// assert_eq!(Key::Index(3).to_key_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Canonical array index.
    Index(usize),
    /// Any other own key.
    Named(&'a str),
}

impl<'a> Key<'a> {
    /// Classify a raw string key.
    pub fn parse(key: &'a str) -> Self {
        match to_array_index(key) {
            Some(index) => Key::Index(index),
            None => Key::Named(key),
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Named(_) => None,
        }
    }

    pub fn as_named(&self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Named(name) => Some(name),
        }
    }

    /// The string under which this key is stored in a keyed map.
    pub fn to_key_string(&self) -> Cow<'a, str> {
        match self {
            Key::Index(index) => Cow::Owned(index.to_string()),
            Key::Named(name) => Cow::Borrowed(name),
        }
    }

    /// Loose (`==`) comparison of this key against a scalar.
    ///
    /// Strings compare by content against named keys; any other pairing
    /// compares numerically. `null`, `undefined` and collections never match.
    ///
    /// # Examples
    ///
    /// ```
    /// use obj_each_util::{Key, Value};
    ///
    /// assert!(Key::Index(0).loose_eq(&Value::from("0")));
    /// assert!(Key::Index(1).loose_eq(&Value::from(1)));
    /// assert!(Key::Named("-1").loose_eq(&Value::from(-1)));
    /// assert!(!Key::Index(0).loose_eq(&Value::from("1")));
    /// assert!(!Key::Index(0).loose_eq(&Value::Null));
    /// ```
    pub fn loose_eq(&self, other: &Value) -> bool {
        let lhs = match (self, other) {
            (_, Value::Undefined | Value::Null | Value::Sequence(_) | Value::Keyed(_)) => {
                return false
            }
            (Key::Named(name), Value::String(s)) => return *name == s.as_str(),
            (Key::Index(index), _) => *index as f64,
            (Key::Named(name), _) => to_number(name),
        };
        let rhs = match other {
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => *n,
            Value::String(s) => to_number(s),
            _ => return false,
        };
        lhs == rhs
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Named(name) => f.write_str(name),
        }
    }
}

impl From<Key<'_>> for Value {
    fn from(key: Key<'_>) -> Self {
        match key {
            Key::Index(index) => Value::Number(index as f64),
            Key::Named(name) => Value::String(name.to_owned()),
        }
    }
}
