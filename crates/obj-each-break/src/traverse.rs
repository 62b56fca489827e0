//! The traversal engine.
//!
//! Every operation in this crate is driven by [`traverse`]. It visits the
//! own entries of a sequence or keyed map in one of three orders and stops
//! as soon as the callback returns [`Flow::Stop`].
//!
//! | Order | Entries |
//! |---|---|
//! | `Forward` | index keys ascending, then named keys ascending |
//! | `Reverse` | named keys descending, then index keys descending |
//! | `Unordered` | storage order |
//!
//! `Reverse` is not the mirror image of `Forward`: named keys come first in
//! both directions.

use for_each_break::{BreakContext, Flow, Outcome};
use obj_each_util::{Key, Value};
use tracing::trace;

use crate::partition::array_object_keys;

/// Direction of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    Forward,
    Reverse,
    Unordered,
}

/// Visit every own entry of `value` in `order`.
///
/// `default` is installed in `ctx` for the duration of the call and is what
/// a bare break resolves to, unless the callback replaces it first. The
/// caller's default is back in place when this returns. Non-collections
/// complete without a callback.
///
/// The callback receives the shared context, the entry value, its key and
/// the collection being traversed.
pub fn traverse<T, F>(
    value: &Value,
    order: Order,
    ctx: &mut BreakContext<T>,
    default: Option<T>,
    mut callback: F,
) -> Outcome<T>
where
    F: FnMut(&mut BreakContext<T>, &Value, Key<'_>, &Value) -> Flow<T>,
{
    let mut scope = ctx.scope(default);
    let stopped = match order {
        Order::Forward => {
            let mut keys = array_object_keys(value);
            keys.sort_object_keys();
            let entries = keys
                .array_values
                .iter()
                .map(|(index, entry)| (Key::Index(index), entry))
                .chain(keys.object_keys.iter().map(|&(name, entry)| (Key::Named(name), entry)));
            drive(entries, &mut *scope, value, &mut callback)
        }
        Order::Reverse => {
            let mut keys = array_object_keys(value);
            keys.sort_object_keys();
            let entries = keys
                .object_keys
                .iter()
                .rev()
                .map(|&(name, entry)| (Key::Named(name), entry))
                .chain(
                    keys.array_values
                        .iter()
                        .rev()
                        .map(|(index, entry)| (Key::Index(index), entry)),
                );
            drive(entries, &mut *scope, value, &mut callback)
        }
        Order::Unordered => match value {
            Value::Sequence(seq) => {
                let entries = seq
                    .entries()
                    .map(|(index, entry)| (Key::Index(index), entry))
                    .chain(seq.named().iter().map(|(name, entry)| (Key::Named(name.as_str()), entry)));
                drive(entries, &mut *scope, value, &mut callback)
            }
            Value::Keyed(map) => {
                let entries = map.iter().map(|(key, entry)| (Key::parse(key), entry));
                drive(entries, &mut *scope, value, &mut callback)
            }
            _ => None,
        },
    };

    match stopped {
        None => Outcome::Completed,
        Some(payload) => {
            let explicit = payload.is_some();
            let result = scope.resolve(payload);
            trace!(?order, explicit, "Traversal broken early");
            Outcome::Broken(result)
        }
    }
}

// Some(payload) when the callback stopped the loop.
fn drive<'v, T, I, F>(
    entries: I,
    ctx: &mut BreakContext<T>,
    collection: &Value,
    callback: &mut F,
) -> Option<Option<T>>
where
    I: Iterator<Item = (Key<'v>, &'v Value)>,
    F: FnMut(&mut BreakContext<T>, &Value, Key<'_>, &Value) -> Flow<T>,
{
    for (key, entry) in entries {
        if let Flow::Stop(payload) = callback(ctx, entry, key, collection) {
            return Some(payload);
        }
    }
    None
}

/// Forward or reverse traversal with a context-aware callback.
pub fn each_dir_with<T, F>(value: &Value, reverse: bool, ctx: &mut BreakContext<T>, callback: F) -> Option<T>
where
    F: FnMut(&mut BreakContext<T>, &Value, Key<'_>, &Value) -> Flow<T>,
{
    let order = if reverse { Order::Reverse } else { Order::Forward };
    traverse(value, order, ctx, None, callback).result_or(None)
}

/// Forward or reverse traversal.
///
/// Returns the break payload, `None` after a bare break, or `None` when every
/// entry was visited.
pub fn each_dir<T, F>(value: &Value, reverse: bool, mut callback: F) -> Option<T>
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<T>,
{
    let mut ctx = BreakContext::new();
    each_dir_with(value, reverse, &mut ctx, |_, entry, key, collection| {
        callback(entry, key, collection)
    })
}

/// Visit index keys ascending, then named keys ascending.
///
/// # Examples
///
/// ```
/// use obj_each_break::{each, Flow, Key};
/// use obj_each_util::Value;
/// use serde_json::json;
///
/// let value = Value::from(json!({"b": 2, "1": "one", "a": 1, "0": "zero"}));
/// let mut seen = Vec::new();
/// let result: Option<()> = each(&value, |_, key, _| {
///     seen.push(key.to_string());
///     Flow::CONTINUE
/// });
/// assert_eq!(result, None);
/// assert_eq!(seen, ["0", "1", "a", "b"]);
///
/// let first_named = each(&value, |entry, key, _| match key {
///     Key::Named(_) => Flow::stop_with(entry.clone()),
///     Key::Index(_) => Flow::CONTINUE,
/// });
/// assert_eq!(first_named, Some(Value::from(1)));
/// ```
pub fn each<T, F>(value: &Value, callback: F) -> Option<T>
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<T>,
{
    each_dir(value, false, callback)
}

/// Visit named keys descending, then index keys descending.
pub fn each_right<T, F>(value: &Value, callback: F) -> Option<T>
where
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<T>,
{
    each_dir(value, true, callback)
}

pub fn each_with<T, F>(value: &Value, ctx: &mut BreakContext<T>, callback: F) -> Option<T>
where
    F: FnMut(&mut BreakContext<T>, &Value, Key<'_>, &Value) -> Flow<T>,
{
    each_dir_with(value, false, ctx, callback)
}

pub fn each_right_with<T, F>(value: &Value, ctx: &mut BreakContext<T>, callback: F) -> Option<T>
where
    F: FnMut(&mut BreakContext<T>, &Value, Key<'_>, &Value) -> Flow<T>,
{
    each_dir_with(value, true, ctx, callback)
}

/// Storage-order traversal with a context-aware callback.
///
/// `default` is the result when every entry is visited, and what a bare
/// break yields unless the callback configured another default.
pub fn each_prop_with<T, F>(
    value: &Value,
    ctx: &mut BreakContext<T>,
    default: Option<T>,
    callback: F,
) -> Option<T>
where
    T: Clone,
    F: FnMut(&mut BreakContext<T>, &Value, Key<'_>, &Value) -> Flow<T>,
{
    traverse(value, Order::Unordered, ctx, default.clone(), callback).result_or(default)
}

/// Visit entries in storage order.
///
/// # Examples
///
/// ```
/// use obj_each_break::{each_prop, Flow};
/// use obj_each_util::Value;
///
/// let value = Value::sequence([1, 2, 3]);
/// assert_eq!(each_prop(&value, Some("none"), |_, _, _| Flow::CONTINUE), Some("none"));
/// assert_eq!(each_prop(&value, Some("none"), |_, _, _| Flow::BREAK), Some("none"));
/// assert_eq!(each_prop(&value, Some("none"), |_, _, _| Flow::stop_with("hit")), Some("hit"));
/// ```
pub fn each_prop<T, F>(value: &Value, default: Option<T>, mut callback: F) -> Option<T>
where
    T: Clone,
    F: FnMut(&Value, Key<'_>, &Value) -> Flow<T>,
{
    let mut ctx = BreakContext::new();
    each_prop_with(value, &mut ctx, default, |_, entry, key, collection| {
        callback(entry, key, collection)
    })
}
